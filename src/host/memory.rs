//! In-memory host implementations.
//!
//! Shared by the test suites and the `simulate` command. They model just
//! enough of a browser tab to exercise the core's contracts: a fragment tree
//! per container, a history stack with a cursor, a string KV store and a
//! single active menu item.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::{DomHost, Fragment, FragmentId, HistoryHost, MenuHost, SessionStore};
use crate::core::{ContainerId, NavPath, PageId};

// =============================================================================
// MemoryDom
// =============================================================================

/// Fragment tree keyed by container.
#[derive(Debug, Default)]
pub struct MemoryDom {
    containers: DashMap<ContainerId, Vec<Fragment>>,
    next_id: AtomicU64,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fragment into a container, returning its id.
    ///
    /// Page modules call this; the core itself never mounts.
    pub fn mount(
        &self,
        container: &ContainerId,
        page_marker: Option<PageId>,
        body: impl Into<String>,
    ) -> FragmentId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.containers
            .entry(container.clone())
            .or_default()
            .push(Fragment {
                id,
                page_marker,
                body: body.into(),
            });
        id
    }

    /// Number of fragments currently mounted in a container.
    pub fn fragment_count(&self, container: &ContainerId) -> usize {
        self.containers
            .get(container)
            .map(|c| c.len())
            .unwrap_or(0)
    }

    /// Drop every fragment in every container (a reload resets the DOM).
    pub fn clear_all(&self) {
        self.containers.clear();
    }

    /// Check whether any fragment in the container carries `page`'s marker.
    pub fn has_marker(&self, container: &ContainerId, page: &PageId) -> bool {
        self.containers
            .get(container)
            .map(|c| c.iter().any(|f| f.page_marker.as_ref() == Some(page)))
            .unwrap_or(false)
    }
}

impl DomHost for MemoryDom {
    fn fragments(&self, container: &ContainerId) -> Vec<Fragment> {
        self.containers
            .get(container)
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    fn remove_fragment(&self, container: &ContainerId, id: FragmentId) {
        if let Some(mut frags) = self.containers.get_mut(container) {
            frags.retain(|f| f.id != id);
        }
    }
}

// =============================================================================
// MemoryHistory
// =============================================================================

/// History stack with a cursor, mirroring browser semantics:
/// pushing truncates any forward entries.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    inner: Mutex<HistoryInner>,
}

#[derive(Debug, Default)]
struct HistoryInner {
    entries: Vec<NavPath>,
    /// Index of the current entry; meaningless while `entries` is empty.
    cursor: usize,
    push_count: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entry, if any.
    pub fn current(&self) -> Option<NavPath> {
        let inner = self.inner.lock();
        inner.entries.get(inner.cursor).cloned()
    }

    /// Move the cursor back one entry and return it (the popstate path).
    pub fn back(&self) -> Option<NavPath> {
        let mut inner = self.inner.lock();
        if inner.cursor == 0 || inner.entries.is_empty() {
            return None;
        }
        inner.cursor -= 1;
        inner.entries.get(inner.cursor).cloned()
    }

    /// Move the cursor forward one entry and return it.
    pub fn forward(&self) -> Option<NavPath> {
        let mut inner = self.inner.lock();
        if inner.cursor + 1 >= inner.entries.len() {
            return None;
        }
        inner.cursor += 1;
        inner.entries.get(inner.cursor).cloned()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<NavPath> {
        self.inner.lock().entries.clone()
    }

    /// Total number of `push` calls (one per forward navigation).
    pub fn push_count(&self) -> usize {
        self.inner.lock().push_count
    }
}

impl HistoryHost for MemoryHistory {
    fn push(&self, path: &NavPath) {
        let mut inner = self.inner.lock();
        if !inner.entries.is_empty() {
            let cut = inner.cursor + 1;
            inner.entries.truncate(cut);
        }
        inner.entries.push(path.clone());
        inner.cursor = inner.entries.len() - 1;
        inner.push_count += 1;
    }

    fn replace(&self, path: &NavPath) {
        let mut inner = self.inner.lock();
        if inner.entries.is_empty() {
            inner.entries.push(path.clone());
            inner.cursor = 0;
        } else {
            let cursor = inner.cursor;
            inner.entries[cursor] = path.clone();
        }
    }
}

// =============================================================================
// MemorySession
// =============================================================================

/// String KV store standing in for `sessionStorage`.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.lock().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.lock().remove(key);
    }
}

// =============================================================================
// MemoryMenu
// =============================================================================

/// Records the most recent active menu marker.
#[derive(Debug, Default)]
pub struct MemoryMenu {
    active: Mutex<Option<PageId>>,
}

impl MemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<PageId> {
        self.active.lock().clone()
    }
}

impl MenuHost for MemoryMenu {
    fn set_active(&self, page_id: &PageId) {
        *self.active.lock() = Some(page_id.clone());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_mount_and_remove() {
        let dom = MemoryDom::new();
        let main = ContainerId::new("main");
        let id = dom.mount(&main, Some(PageId::new("a")), "<ul>...</ul>");
        dom.mount(&main, None, "<div>chrome</div>");

        assert_eq!(dom.fragment_count(&main), 2);
        assert!(dom.has_marker(&main, &PageId::new("a")));

        dom.remove_fragment(&main, id);
        assert_eq!(dom.fragment_count(&main), 1);
        assert!(!dom.has_marker(&main, &PageId::new("a")));

        // Unknown id is a no-op
        dom.remove_fragment(&main, 999);
        assert_eq!(dom.fragment_count(&main), 1);
    }

    #[test]
    fn test_history_push_and_back() {
        let history = MemoryHistory::new();
        history.replace(&NavPath::new("/a"));
        history.push(&NavPath::new("/b"));
        history.push(&NavPath::new("/c"));

        assert_eq!(history.push_count(), 2);
        assert_eq!(history.entries().len(), 3);
        assert_eq!(history.current().unwrap().as_str(), "/c");

        assert_eq!(history.back().unwrap().as_str(), "/b");
        assert_eq!(history.back().unwrap().as_str(), "/a");
        assert!(history.back().is_none());

        assert_eq!(history.forward().unwrap().as_str(), "/b");
    }

    #[test]
    fn test_history_push_truncates_forward_entries() {
        let history = MemoryHistory::new();
        history.push(&NavPath::new("/a"));
        history.push(&NavPath::new("/b"));
        history.push(&NavPath::new("/c"));
        history.back();
        history.back();

        // Pushing from the middle drops /b and /c
        history.push(&NavPath::new("/d"));
        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].as_str(), "/d");
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_history_replace_keeps_entry_count() {
        let history = MemoryHistory::new();
        history.push(&NavPath::new("/a"));
        history.replace(&NavPath::new("/b"));

        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.current().unwrap().as_str(), "/b");
        assert_eq!(history.push_count(), 1);
    }

    #[test]
    fn test_session_store_roundtrip() {
        let store = MemorySession::new();
        assert!(store.get("k").is_none());
        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_menu_active_marker() {
        let menu = MemoryMenu::new();
        assert!(menu.active().is_none());
        menu.set_active(&PageId::new("kpi"));
        assert_eq!(menu.active().unwrap().as_str(), "kpi");
    }
}
