//! Navigator - the serialized navigation queue.
//!
//! All navigation sources (menu clicks, popstate, programmatic calls) funnel
//! into one mpsc queue consumed by a single owner of the controller. A
//! request arriving while another is in flight simply waits its turn:
//! navigations are processed in arrival order, never interleaved, which is
//! what upholds the at-most-one-render invariant.

use tokio::sync::mpsc;

use super::machine::{NavKind, NavTarget, RouteLifecycleController};
use crate::core::{NavPath, PageId};
use crate::debug;

/// Messages to the Navigator
#[derive(Debug)]
pub enum NavMsg {
    /// Run one navigation.
    Navigate { target: NavTarget, kind: NavKind },
    /// Stop processing (tab teardown).
    Shutdown,
}

// =============================================================================
// NavigatorHandle
// =============================================================================

/// Cloneable sender side; what menu handlers and popstate listeners hold.
#[derive(Debug, Clone)]
pub struct NavigatorHandle {
    tx: mpsc::UnboundedSender<NavMsg>,
}

impl NavigatorHandle {
    /// Forward navigation to a path (link or address-bar entry).
    pub fn goto(&self, path: NavPath) {
        self.request(NavTarget::Path(path), NavKind::Push);
    }

    /// Forward navigation to a page (menu elements carry page ids).
    pub fn goto_page(&self, page_id: PageId) {
        self.request(NavTarget::Page(page_id), NavKind::Push);
    }

    /// Back/forward traversal re-entering the controller (popstate).
    pub fn popstate(&self, path: NavPath) {
        self.request(NavTarget::Path(path), NavKind::Pop);
    }

    pub fn request(&self, target: NavTarget, kind: NavKind) {
        // A closed queue means the tab is tearing down; nothing to do.
        let _ = self.tx.send(NavMsg::Navigate { target, kind });
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(NavMsg::Shutdown);
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Owns the controller and replays queued requests one at a time.
pub struct Navigator {
    controller: RouteLifecycleController,
    rx: mpsc::UnboundedReceiver<NavMsg>,
}

impl Navigator {
    pub fn new(controller: RouteLifecycleController) -> (Self, NavigatorHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { controller, rx }, NavigatorHandle { tx })
    }

    pub fn controller(&self) -> &RouteLifecycleController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RouteLifecycleController {
        &mut self.controller
    }

    /// Give the controller back (reload simulation tears the queue down).
    pub fn into_controller(self) -> RouteLifecycleController {
        self.controller
    }

    /// Process messages until `Shutdown` or all handles are dropped.
    pub async fn run(mut self) -> RouteLifecycleController {
        while let Some(msg) = self.rx.recv().await {
            if self.handle(msg).await {
                break;
            }
        }
        debug!("nav"; "navigator stopped");
        self.controller
    }

    /// Drain everything queued right now without waiting for more.
    /// Returns the number of navigations processed.
    pub async fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.rx.try_recv() {
            if self.handle(msg).await {
                break;
            }
            processed += 1;
        }
        processed
    }

    /// Returns true on shutdown.
    async fn handle(&mut self, msg: NavMsg) -> bool {
        match msg {
            NavMsg::Navigate { target, kind } => {
                self.controller.navigate(target, kind).await;
                false
            }
            NavMsg::Shutdown => true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
