//! Route lifecycle controller.
//!
//! Drives a single navigation through
//! `Idle -> Resolving -> Deactivating -> Activating -> Idle`, with a
//! per-attempt failure path that releases any held lease, logs, and falls
//! back to the default route. A navigation never leaves the UI in a partial
//! state: the worst user-visible outcome is landing on the default page with
//! a non-blocking notice.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::core::{ActivePageState, ContainerId, NavError, NavPath, PageId, epoch_ms};
use crate::guard::{Lease, RenderOwnershipGuard};
use crate::host::{DomHost, HistoryHost, MenuHost};
use crate::page::PageRegistry;
use crate::persist::RefreshPersistence;
use crate::route::{Route, RouteTable};
use crate::{debug, log};

/// Default ceiling for a page module's `load()`.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_millis(10_000);

// =============================================================================
// Requests and outcomes
// =============================================================================

/// What a navigation points at.
#[derive(Debug, Clone)]
pub enum NavTarget {
    /// A URL path (address bar, links).
    Path(NavPath),
    /// A logical page (menu elements carry a page id attribute).
    Page(PageId),
}

/// How the navigation entered the system; decides history semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    /// Forward navigation: one new history entry.
    Push,
    /// Back/forward traversal: replace, never corrupt the stack.
    Pop,
    /// Bootstrap/restore: replace, the entry already exists.
    Initial,
}

/// Result of a navigation after all recovery has run.
#[derive(Debug, Clone)]
pub struct NavOutcome {
    /// The page left active, or None if even the default route failed.
    pub page_id: Option<PageId>,
    /// True when the requested target was not what ended up active.
    pub fell_back: bool,
}

/// The lifecycle phases. `Failed` is not a resting state: a failed attempt
/// runs its recovery and lands back on `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Resolving,
    Deactivating,
    Activating,
}

/// The shell-facing collaborators, bundled so construction stays readable.
pub struct ShellHosts {
    pub history: Arc<dyn HistoryHost>,
    pub dom: Arc<dyn DomHost>,
    pub menu: Arc<dyn MenuHost>,
}

// =============================================================================
// RouteLifecycleController
// =============================================================================

/// Orchestrates transitions between pages.
///
/// Owns the [`ActivePageState`] outright - no ambient globals. Callers go
/// through the [`Navigator`](super::Navigator) queue, which serializes
/// navigations and thereby upholds the at-most-one-render invariant.
pub struct RouteLifecycleController {
    table: Arc<RouteTable>,
    registry: Arc<PageRegistry>,
    guard: RenderOwnershipGuard,
    hosts: ShellHosts,
    state: ActivePageState,
    load_timeout: Duration,
    phase: Phase,
    failure_notice: Option<String>,
}

impl RouteLifecycleController {
    pub fn new(
        table: Arc<RouteTable>,
        registry: Arc<PageRegistry>,
        guard: RenderOwnershipGuard,
        hosts: ShellHosts,
    ) -> Self {
        Self {
            table,
            registry,
            guard,
            hosts,
            state: ActivePageState::new(),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            phase: Phase::Idle,
            failure_notice: None,
        }
    }

    /// Override the `load()` ceiling.
    pub fn with_load_timeout(mut self, load_timeout: Duration) -> Self {
        self.load_timeout = load_timeout;
        self
    }

    pub fn state(&self) -> &ActivePageState {
        &self.state
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Non-blocking "page failed to load" notice from the last navigation,
    /// set only when even the fallback could not activate.
    pub fn failure_notice(&self) -> Option<&str> {
        self.failure_notice.as_deref()
    }

    /// True between navigations. Failure is never a resting state.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Run one full navigation, including fallback recovery.
    ///
    /// Errors never escape: they are logged and degraded to the default
    /// route. The controller is back in `Idle` when this returns.
    pub async fn navigate(&mut self, target: NavTarget, kind: NavKind) -> NavOutcome {
        self.failure_notice = None;
        self.phase = Phase::Resolving;

        let (route, mut fell_back) = match self.resolve_target(&target) {
            Ok(route) => (route, false),
            Err(err) => {
                log!("nav"; "{}; falling back to default route", err);
                (self.table.default_route().clone(), true)
            }
        };

        let outcome = match self.attempt(&route, kind).await {
            Ok(()) => NavOutcome {
                page_id: Some(route.page_id.clone()),
                fell_back,
            },
            Err(err) => {
                let err = anyhow::Error::from(err);
                log!("error"; "navigation to `{}` failed: {:#}", route.path, err);
                fell_back = true;

                let default = self.table.default_route().clone();
                if default.page_id != route.page_id {
                    match self.attempt(&default, kind).await {
                        Ok(()) => NavOutcome {
                            page_id: Some(default.page_id.clone()),
                            fell_back,
                        },
                        Err(err) => self.give_up(&default, err.into()),
                    }
                } else {
                    self.give_up(&route, anyhow::Error::msg("default route failed"))
                }
            }
        };

        self.phase = Phase::Idle;
        outcome
    }

    /// Initial navigation on load: a fresh persisted route wins, then an
    /// explicit deep link, then the configured default.
    pub async fn bootstrap(
        &mut self,
        persistence: &RefreshPersistence,
        deep_link: Option<NavPath>,
    ) -> NavOutcome {
        self.bootstrap_at(persistence, deep_link, epoch_ms()).await
    }

    /// `bootstrap` with an explicit clock, for tests.
    pub async fn bootstrap_at(
        &mut self,
        persistence: &RefreshPersistence,
        deep_link: Option<NavPath>,
        now_ms: u64,
    ) -> NavOutcome {
        let target = if let Some(path) = persistence.restore_at(now_ms) {
            debug!("nav"; "restoring `{}` from persisted route", path);
            NavTarget::Path(path)
        } else if let Some(path) = deep_link {
            NavTarget::Path(path)
        } else {
            NavTarget::Path(self.table.default_route().path.clone())
        };
        self.navigate(target, NavKind::Initial).await
    }

    // -------------------------------------------------------------------------
    // Transition internals
    // -------------------------------------------------------------------------

    fn resolve_target(&self, target: &NavTarget) -> Result<Route, NavError> {
        match target {
            NavTarget::Path(path) => self.table.resolve(path).cloned(),
            NavTarget::Page(page_id) => self
                .table
                .find_page(page_id)
                .cloned()
                .ok_or_else(|| NavError::PageNotRouted(page_id.clone())),
        }
    }

    /// One attempt at activating a route. Any error aborts the attempt with
    /// the lease released (RAII) and the render flag cleared.
    async fn attempt(&mut self, route: &Route, kind: NavKind) -> Result<(), NavError> {
        self.phase = Phase::Deactivating;
        self.deactivate_current();

        let lease = self.claim_with_retry(&route.container_id)?;
        self.phase = Phase::Activating;

        let module = self.registry.get(&route.page_id)?;

        self.state.begin_render();
        let loaded = timeout(self.load_timeout, module.load()).await;
        self.state.finish_render();

        match loaded {
            Err(_) => {
                return Err(NavError::LoadTimeout(
                    route.page_id.clone(),
                    self.load_timeout,
                ));
            }
            Ok(Err(source)) => {
                return Err(NavError::ModuleLoadFailure {
                    page: route.page_id.clone(),
                    source,
                });
            }
            Ok(Ok(())) => {}
        }

        // Commit: sweep leftovers, then publish the new route everywhere.
        self.guard
            .sweep(self.hosts.dom.as_ref(), &lease, &route.page_id);
        match kind {
            NavKind::Push => self.hosts.history.push(&route.path),
            NavKind::Pop | NavKind::Initial => self.hosts.history.replace(&route.path),
        }
        self.hosts.menu.set_active(&route.page_id);
        self.state
            .record_transition(route.page_id.clone(), route.path.clone(), epoch_ms());

        self.guard.release(lease);
        debug!("nav"; "activated `{}` at `{}`", route.page_id, route.path);
        Ok(())
    }

    /// Invoke the previous page's `cleanup()`. Failures are logged, never
    /// allowed to block the transition.
    fn deactivate_current(&mut self) {
        let Some(prev) = self.state.current_page_id().cloned() else {
            return;
        };
        let Ok(module) = self.registry.get(&prev) else {
            return;
        };
        if catch_unwind(AssertUnwindSafe(|| module.cleanup())).is_err() {
            log!("nav"; "cleanup for `{}` panicked; continuing transition", prev);
        }
    }

    /// Claim the container; on contention, force-expire a wedged lease and
    /// retry once. A fresh (legitimate) claim keeps the container busy.
    fn claim_with_retry(&self, container: &ContainerId) -> Result<Lease, NavError> {
        match self.guard.claim(container) {
            Ok(lease) => Ok(lease),
            Err(NavError::ContainerBusy(_)) => {
                if self.guard.expire_stale(container) {
                    self.guard.claim(container)
                } else {
                    Err(NavError::ContainerBusy(container.clone()))
                }
            }
            Err(err) => Err(err),
        }
    }

    fn give_up(&mut self, route: &Route, err: anyhow::Error) -> NavOutcome {
        log!("error"; "default route `{}` also failed: {:#}", route.path, err);
        self.failure_notice = Some("page failed to load".to_string());
        NavOutcome {
            page_id: None,
            fell_back: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryDom, MemoryHistory, MemoryMenu, MemorySession};
    use crate::page::FnPage;
    use crate::persist::DEFAULT_PERSIST_WINDOW;
    use parking_lot::Mutex;

    /// Everything a test shell needs, with concrete host handles retained.
    struct Shell {
        table: Arc<RouteTable>,
        registry: Arc<PageRegistry>,
        guard: RenderOwnershipGuard,
        history: Arc<MemoryHistory>,
        dom: Arc<MemoryDom>,
        menu: Arc<MemoryMenu>,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Shell {
        /// Routes `/` (dashboard, default), `/a`, `/b`, `/c`, all in the
        /// `main` container, each page mounting one marked fragment.
        fn new() -> Self {
            let routes = vec![
                route("/", "dashboard", "main"),
                route("/a", "a", "main"),
                route("/b", "b", "main"),
                route("/c", "c", "main"),
            ];
            let table = Arc::new(RouteTable::new(routes, &NavPath::new("/")).unwrap());
            let registry = Arc::new(PageRegistry::new());
            let dom = Arc::new(MemoryDom::new());
            let events = Arc::new(Mutex::new(Vec::new()));

            for page in ["dashboard", "a", "b", "c"] {
                register_stub(&registry, &dom, &events, page);
            }

            Self {
                table,
                registry,
                guard: RenderOwnershipGuard::default(),
                history: Arc::new(MemoryHistory::new()),
                dom,
                menu: Arc::new(MemoryMenu::new()),
                events,
            }
        }

        fn controller(&self) -> RouteLifecycleController {
            RouteLifecycleController::new(
                self.table.clone(),
                self.registry.clone(),
                self.guard.clone(),
                ShellHosts {
                    history: self.history.clone(),
                    dom: self.dom.clone(),
                    menu: self.menu.clone(),
                },
            )
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().clone()
        }
    }

    fn route(path: &str, page: &str, container: &str) -> Route {
        Route {
            path: NavPath::new(path),
            page_id: PageId::new(page),
            container_id: ContainerId::new(container),
        }
    }

    /// Stub page: `load` mounts one marked fragment and logs; `cleanup`
    /// logs. Leftover fragments are deliberately not removed on cleanup so
    /// the sweep is what keeps the container clean.
    fn register_stub(
        registry: &Arc<PageRegistry>,
        dom: &Arc<MemoryDom>,
        events: &Arc<Mutex<Vec<String>>>,
        page: &str,
    ) {
        let page_id = PageId::new(page);
        let load_dom = dom.clone();
        let load_events = events.clone();
        let load_page = page_id.clone();
        let cleanup_events = events.clone();
        let cleanup_page = page_id.clone();

        let module = FnPage::new(move || {
            let dom = load_dom.clone();
            let events = load_events.clone();
            let page = load_page.clone();
            async move {
                tokio::task::yield_now().await;
                dom.mount(
                    &ContainerId::new("main"),
                    Some(page.clone()),
                    format!("<section data-page=\"{page}\"></section>"),
                );
                events.lock().push(format!("load:{page}"));
                Ok(())
            }
        })
        .with_cleanup(move || {
            cleanup_events.lock().push(format!("cleanup:{cleanup_page}"));
        });

        registry.register(page_id, Arc::new(module)).unwrap();
    }

    async fn goto(controller: &mut RouteLifecycleController, path: &str) -> NavOutcome {
        controller
            .navigate(NavTarget::Path(NavPath::new(path)), NavKind::Push)
            .await
    }

    #[tokio::test]
    async fn test_successful_navigation_updates_everything() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        let outcome = goto(&mut controller, "/a").await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "a");
        assert!(!outcome.fell_back);
        assert!(controller.is_idle());

        assert_eq!(controller.state().current_page_id().unwrap().as_str(), "a");
        assert_eq!(controller.state().current_path().unwrap().as_str(), "/a");
        assert!(!controller.state().is_rendering());
        assert_eq!(shell.menu.active().unwrap().as_str(), "a");
        assert_eq!(shell.history.current().unwrap().as_str(), "/a");
        assert!(shell.dom.has_marker(&ContainerId::new("main"), &PageId::new("a")));
    }

    #[tokio::test]
    async fn test_cleanup_precedes_next_load() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        goto(&mut controller, "/a").await;
        goto(&mut controller, "/b").await;

        assert_eq!(
            shell.events(),
            vec!["load:a", "cleanup:a", "load:b"],
            "deactivation must precede activation"
        );
    }

    #[tokio::test]
    async fn test_no_cross_page_bleed_after_transition() {
        let shell = Shell::new();
        let mut controller = shell.controller();
        let main = ContainerId::new("main");

        goto(&mut controller, "/a").await;
        goto(&mut controller, "/b").await;

        // Page A's content must be gone; only B's remains.
        assert!(!shell.dom.has_marker(&main, &PageId::new("a")));
        assert!(shell.dom.has_marker(&main, &PageId::new("b")));
        assert_eq!(shell.dom.fragment_count(&main), 1);
    }

    #[tokio::test]
    async fn test_navigation_by_page_id() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        let outcome = controller
            .navigate(NavTarget::Page(PageId::new("b")), NavKind::Push)
            .await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "b");
        assert_eq!(shell.history.current().unwrap().as_str(), "/b");
    }

    #[tokio::test]
    async fn test_unknown_page_id_falls_back_to_default() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        let outcome = controller
            .navigate(NavTarget::Page(PageId::new("ghost")), NavKind::Push)
            .await;
        assert!(outcome.fell_back);
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_default() {
        let shell = Shell::new();
        let registry = shell.registry.clone();
        registry
            .register(
                PageId::new("broken"),
                Arc::new(FnPage::new(|| async { anyhow::bail!("backend 503") })),
            )
            .unwrap();
        let table = Arc::new(
            RouteTable::new(
                vec![route("/", "dashboard", "main"), route("/broken", "broken", "main")],
                &NavPath::new("/"),
            )
            .unwrap(),
        );
        let mut controller = RouteLifecycleController::new(
            table,
            registry,
            shell.guard.clone(),
            ShellHosts {
                history: shell.history.clone(),
                dom: shell.dom.clone(),
                menu: shell.menu.clone(),
            },
        );

        let outcome = goto(&mut controller, "/broken").await;
        assert!(outcome.fell_back);
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
        assert!(controller.failure_notice().is_none());
        assert!(!controller.state().is_rendering());
        // The lease was released on the failure path: next claim succeeds
        assert!(!shell.guard.is_claimed(&ContainerId::new("main")));
    }

    #[tokio::test]
    async fn test_unregistered_module_falls_back() {
        let shell = Shell::new();
        let table = Arc::new(
            RouteTable::new(
                vec![route("/", "dashboard", "main"), route("/ghost", "ghost", "main")],
                &NavPath::new("/"),
            )
            .unwrap(),
        );
        let mut controller = RouteLifecycleController::new(
            table,
            shell.registry.clone(),
            shell.guard.clone(),
            ShellHosts {
                history: shell.history.clone(),
                dom: shell.dom.clone(),
                menu: shell.menu.clone(),
            },
        );

        let outcome = goto(&mut controller, "/ghost").await;
        assert!(outcome.fell_back);
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_load_times_out_and_falls_back() {
        let shell = Shell::new();
        shell
            .registry
            .register(
                PageId::new("hung"),
                Arc::new(FnPage::new(|| async {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(())
                })),
            )
            .unwrap();
        let table = Arc::new(
            RouteTable::new(
                vec![route("/", "dashboard", "main"), route("/hung", "hung", "main")],
                &NavPath::new("/"),
            )
            .unwrap(),
        );
        let mut controller = RouteLifecycleController::new(
            table,
            shell.registry.clone(),
            shell.guard.clone(),
            ShellHosts {
                history: shell.history.clone(),
                dom: shell.dom.clone(),
                menu: shell.menu.clone(),
            },
        )
        .with_load_timeout(Duration::from_millis(100));

        let outcome = goto(&mut controller, "/hung").await;
        assert!(outcome.fell_back);
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
        // is_rendering never sticks true after a hung load
        assert!(!controller.state().is_rendering());
    }

    #[tokio::test]
    async fn test_busy_container_falls_back_then_recovers() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        // Default route shares the container, so a fresh foreign lease
        // blocks the fallback too: that is the "page failed to load" path.
        let foreign = shell.guard.claim(&ContainerId::new("main")).unwrap();
        let outcome = goto(&mut controller, "/a").await;
        assert!(outcome.page_id.is_none());
        assert_eq!(controller.failure_notice(), Some("page failed to load"));

        // Once the foreign lease is gone, navigation works again.
        shell.guard.release(foreign);
        let outcome = goto(&mut controller, "/a").await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "a");
        assert!(controller.failure_notice().is_none());
    }

    #[tokio::test]
    async fn test_wedged_lease_is_expired_and_navigation_proceeds() {
        let shell = Shell::new();
        let guard = RenderOwnershipGuard::new(Duration::from_millis(10));
        let mut controller = RouteLifecycleController::new(
            shell.table.clone(),
            shell.registry.clone(),
            guard.clone(),
            ShellHosts {
                history: shell.history.clone(),
                dom: shell.dom.clone(),
                menu: shell.menu.clone(),
            },
        );

        // A crashed renderer left its claim behind
        let _wedged = guard.claim(&ContainerId::new("main")).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let outcome = goto(&mut controller, "/a").await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "a");
        assert!(!outcome.fell_back);
    }

    #[tokio::test]
    async fn test_history_correctness_across_back_navigation() {
        let shell = Shell::new();
        let mut controller = shell.controller();

        // Initial landing plus two forward navigations
        controller
            .navigate(NavTarget::Path(NavPath::new("/a")), NavKind::Initial)
            .await;
        goto(&mut controller, "/b").await;
        goto(&mut controller, "/c").await;

        assert_eq!(shell.history.push_count(), 2);
        assert_eq!(shell.history.entries().len(), 3);

        // Back: C -> B -> A, replay through the controller as popstate
        let back = shell.history.back().unwrap();
        controller
            .navigate(NavTarget::Path(back), NavKind::Pop)
            .await;
        assert_eq!(controller.state().current_page_id().unwrap().as_str(), "b");

        let back = shell.history.back().unwrap();
        controller
            .navigate(NavTarget::Path(back), NavKind::Pop)
            .await;
        assert_eq!(controller.state().current_page_id().unwrap().as_str(), "a");

        // Pop navigations produced no new entries and no extra pushes
        assert_eq!(shell.history.push_count(), 2);
        assert_eq!(shell.history.entries().len(), 3);
    }

    // -------------------------------------------------------------------------
    // Bootstrap / refresh persistence
    // -------------------------------------------------------------------------

    fn persistence(session: &Arc<MemorySession>) -> RefreshPersistence {
        RefreshPersistence::new(session.clone(), DEFAULT_PERSIST_WINDOW)
    }

    #[tokio::test]
    async fn test_refresh_restores_route_within_window() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        // Navigate to /a, unload at t=0, reload at t=5000 with no deep link
        let mut controller = shell.controller();
        goto(&mut controller, "/a").await;
        persist.capture_at(controller.state(), 0);

        let mut reloaded = shell.controller();
        let outcome = reloaded.bootstrap_at(&persist, None, 5_000).await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "a");
        assert_eq!(reloaded.state().current_path().unwrap().as_str(), "/a");
    }

    #[tokio::test]
    async fn test_refresh_idempotence_for_every_route() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        let paths: Vec<NavPath> = shell.table.iter().map(|r| r.path.clone()).collect();
        for path in paths {
            let mut controller = shell.controller();
            controller
                .navigate(NavTarget::Path(path.clone()), NavKind::Push)
                .await;
            persist.capture_at(controller.state(), 0);

            let mut reloaded = shell.controller();
            reloaded.bootstrap_at(&persist, None, 5_000).await;
            assert_eq!(
                reloaded.state().current_path().unwrap(),
                &path,
                "reload must restore {path}"
            );
        }
    }

    #[tokio::test]
    async fn test_stale_record_yields_default_route() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        let mut controller = shell.controller();
        goto(&mut controller, "/a").await;
        persist.capture_at(controller.state(), 0);

        // Past the 15s window: the default route governs
        let mut reloaded = shell.controller();
        let outcome = reloaded.bootstrap_at(&persist, None, 20_000).await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
    }

    #[tokio::test]
    async fn test_deep_link_wins_when_no_record() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        let mut controller = shell.controller();
        let outcome = controller
            .bootstrap_at(&persist, Some(NavPath::new("/b")), 0)
            .await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "b");
    }

    #[tokio::test]
    async fn test_fresh_record_overrides_deep_link() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        let mut controller = shell.controller();
        goto(&mut controller, "/a").await;
        persist.capture_at(controller.state(), 0);

        let mut reloaded = shell.controller();
        let outcome = reloaded
            .bootstrap_at(&persist, Some(NavPath::new("/b")), 1_000)
            .await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "a");
    }

    #[tokio::test]
    async fn test_bootstrap_without_record_or_deep_link_uses_default() {
        let shell = Shell::new();
        let session = Arc::new(MemorySession::new());
        let persist = persistence(&session);

        let mut controller = shell.controller();
        let outcome = controller.bootstrap_at(&persist, None, 0).await;
        assert_eq!(outcome.page_id.unwrap().as_str(), "dashboard");
        // Initial navigation replaces rather than pushes
        assert_eq!(shell.history.push_count(), 0);
        assert_eq!(shell.history.entries().len(), 1);
    }
}
