//! `wayline simulate` - replay a navigation script against in-memory hosts.
//!
//! The simulator stands in for a browser shell: stub page modules render a
//! marked fragment into their container, history and session storage are the
//! in-memory hosts, and every script command funnels through the same
//! serialized navigator the shell would use.
//!
//! # Script commands
//!
//! ```text
//! goto /risks            # forward navigation to a path
//! goto-page kpi          # forward navigation by page id
//! back                   # history back (popstate)
//! forward                # history forward (popstate)
//! reload 5000            # unload+reload with the clock advanced 5000ms
//! wedge main-content     # leak a claim, simulating a crashed renderer
//! status                 # print active page and history stack
//! # comments and blank lines are skipped
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use crate::config::AppConfig;
use crate::core::{ContainerId, NavPath, PageId, epoch_ms};
use crate::guard::RenderOwnershipGuard;
use crate::host::{MemoryDom, MemoryHistory, MemoryMenu, MemorySession};
use crate::lifecycle::{Navigator, NavigatorHandle, RouteLifecycleController, ShellHosts};
use crate::page::{FnPage, PageModule, PageRegistry};
use crate::persist::RefreshPersistence;
use crate::route::RouteTable;
use crate::{debug, log};

pub fn run(config: &AppConfig, script: &Path) -> Result<()> {
    let content = if script.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        fs::read_to_string(script)
            .with_context(|| format!("failed to read script `{}`", script.display()))?
    };

    let commands = parse_script(&content)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let mut session = Session::new(config)?;
        session.bootstrap().await;
        for command in commands {
            session.execute(command).await;
        }
        Ok(())
    })
}

// =============================================================================
// Script parsing
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptCmd {
    Goto(NavPath),
    GotoPage(PageId),
    Back,
    Forward,
    Reload(u64),
    Wedge(ContainerId),
    Status,
}

fn parse_script(content: &str) -> Result<Vec<ScriptCmd>> {
    let mut commands = Vec::new();
    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        commands.push(
            parse_line(line).with_context(|| format!("script line {}: `{}`", lineno + 1, raw))?,
        );
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<ScriptCmd> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().unwrap_or_default();
    let arg = parts.next();

    let parsed = match (cmd, arg) {
        ("goto", Some(path)) => ScriptCmd::Goto(NavPath::new(path)),
        ("goto-page", Some(page)) => ScriptCmd::GotoPage(PageId::new(page)),
        ("back", None) => ScriptCmd::Back,
        ("forward", None) => ScriptCmd::Forward,
        ("reload", delta) => {
            let delta = delta.unwrap_or("0").parse::<u64>().context("reload delta")?;
            ScriptCmd::Reload(delta)
        }
        ("wedge", Some(container)) => ScriptCmd::Wedge(ContainerId::new(container)),
        ("status", None) => ScriptCmd::Status,
        _ => bail!("unknown command"),
    };
    Ok(parsed)
}

// =============================================================================
// Session
// =============================================================================

/// One simulated browser tab.
struct Session {
    table: Arc<RouteTable>,
    registry: Arc<PageRegistry>,
    guard: RenderOwnershipGuard,
    history: Arc<MemoryHistory>,
    dom: Arc<MemoryDom>,
    menu: Arc<MemoryMenu>,
    persistence: RefreshPersistence,
    navigator: Navigator,
    handle: NavigatorHandle,
    load_timeout: std::time::Duration,
}

impl Session {
    fn new(config: &AppConfig) -> Result<Self> {
        let table = Arc::new(config.route_table()?);
        let registry = Arc::new(PageRegistry::new());
        let guard = RenderOwnershipGuard::new(config.lease_timeout());
        let history = Arc::new(MemoryHistory::new());
        let dom = Arc::new(MemoryDom::new());
        let menu = Arc::new(MemoryMenu::new());
        let persistence = RefreshPersistence::new(
            Arc::new(MemorySession::new()),
            config.persist_window(),
        );

        // Bootstrap-phase registration: one stub module per page id.
        // Alias routes share a page, so skip ids already bound.
        for route in table.iter() {
            if registry.contains(&route.page_id) {
                continue;
            }
            let module = stub_page(&dom, &route.page_id, &route.container_id);
            registry.register(route.page_id.clone(), module)?;
        }

        let controller = Self::build_controller(
            &table,
            &registry,
            &guard,
            &history,
            &dom,
            &menu,
            config.load_timeout(),
        );
        let (navigator, handle) = Navigator::new(controller);

        Ok(Self {
            table,
            registry,
            guard,
            history,
            dom,
            menu,
            persistence,
            navigator,
            handle,
            load_timeout: config.load_timeout(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_controller(
        table: &Arc<RouteTable>,
        registry: &Arc<PageRegistry>,
        guard: &RenderOwnershipGuard,
        history: &Arc<MemoryHistory>,
        dom: &Arc<MemoryDom>,
        menu: &Arc<MemoryMenu>,
        load_timeout: std::time::Duration,
    ) -> RouteLifecycleController {
        RouteLifecycleController::new(
            table.clone(),
            registry.clone(),
            guard.clone(),
            ShellHosts {
                history: history.clone(),
                dom: dom.clone(),
                menu: menu.clone(),
            },
        )
        .with_load_timeout(load_timeout)
    }

    async fn bootstrap(&mut self) {
        self.navigator
            .controller_mut()
            .bootstrap(&self.persistence, None)
            .await;
        self.report();
    }

    async fn execute(&mut self, command: ScriptCmd) {
        match command {
            ScriptCmd::Goto(path) => {
                log!("simulate"; "goto {}", path);
                self.handle.goto(path);
                self.navigator.pump().await;
                self.report();
            }
            ScriptCmd::GotoPage(page) => {
                log!("simulate"; "goto-page {}", page);
                self.handle.goto_page(page);
                self.navigator.pump().await;
                self.report();
            }
            ScriptCmd::Back => match self.history.back() {
                Some(path) => {
                    log!("simulate"; "back -> {}", path);
                    self.handle.popstate(path);
                    self.navigator.pump().await;
                    self.report();
                }
                None => log!("simulate"; "back: history is at the oldest entry"),
            },
            ScriptCmd::Forward => match self.history.forward() {
                Some(path) => {
                    log!("simulate"; "forward -> {}", path);
                    self.handle.popstate(path);
                    self.navigator.pump().await;
                    self.report();
                }
                None => log!("simulate"; "forward: history is at the newest entry"),
            },
            ScriptCmd::Reload(delta_ms) => {
                log!("simulate"; "reload (+{}ms)", delta_ms);
                self.reload(delta_ms).await;
                self.report();
            }
            ScriptCmd::Wedge(container) => match self.guard.claim(&container) {
                Ok(lease) => {
                    log!("simulate"; "wedged `{}` (leaking its lease)", container);
                    // A crashed renderer never releases; forget the lease so
                    // only the timeout can free the container.
                    std::mem::forget(lease);
                }
                Err(err) => log!("simulate"; "wedge failed: {}", err),
            },
            ScriptCmd::Status => {
                self.report();
                for (i, entry) in self.history.entries().iter().enumerate() {
                    debug!("simulate"; "history[{}] = {}", i, entry);
                }
            }
        }
    }

    /// Tear the tab down and bring it back up with the clock advanced.
    async fn reload(&mut self, delta_ms: u64) {
        self.persistence
            .capture(self.navigator.controller().state());

        // A reload resets the DOM; history and session storage survive.
        self.dom.clear_all();

        let controller = Self::build_controller(
            &self.table,
            &self.registry,
            &self.guard,
            &self.history,
            &self.dom,
            &self.menu,
            self.load_timeout,
        );
        let (mut navigator, handle) = Navigator::new(controller);
        navigator
            .controller_mut()
            .bootstrap_at(&self.persistence, None, epoch_ms() + delta_ms)
            .await;
        self.navigator = navigator;
        self.handle = handle;
    }

    fn report(&self) {
        let state = self.navigator.controller().state();
        match (state.current_page_id(), state.current_path()) {
            (Some(page), Some(path)) => {
                log!("nav"; "active: `{}` at `{}`", page, path);
            }
            _ => log!("nav"; "no active page"),
        }
        if let Some(notice) = self.navigator.controller().failure_notice() {
            log!("error"; "{}", notice);
        }
    }
}

/// Stub page module: mounts one marked fragment into its container.
fn stub_page(
    dom: &Arc<MemoryDom>,
    page_id: &PageId,
    container_id: &ContainerId,
) -> Arc<dyn PageModule> {
    let dom = dom.clone();
    let page = page_id.clone();
    let container = container_id.clone();
    Arc::new(FnPage::new(move || {
        let dom = dom.clone();
        let page = page.clone();
        let container = container.clone();
        Box::pin(async move {
            dom.mount(
                &container,
                Some(page.clone()),
                format!("<section data-page=\"{page}\"></section>"),
            );
            Ok(())
        }) as std::pin::Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>
    }))
}

// =============================================================================
// Tests
// =============================================================================
