//! Host interfaces - the narrow seams between the navigation core and the
//! shell that embeds it.
//!
//! The core never touches the display, the history stack, session storage or
//! the menu directly; it goes through these traits. A browser shell binds
//! them to `history.pushState`, `sessionStorage` and the DOM; tests and the
//! simulator bind them to the in-memory implementations in [`memory`].

pub mod memory;

use crate::core::{ContainerId, NavPath, PageId};

pub use memory::{MemoryDom, MemoryHistory, MemoryMenu, MemorySession};

// =============================================================================
// DOM
// =============================================================================

/// Identity of a single mounted fragment within a container.
pub type FragmentId = u64;

/// A piece of content mounted inside a container.
///
/// `page_marker` is the content signature: which page the fragment belongs
/// to. Fragments without a marker are opaque to the core and never swept.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub id: FragmentId,
    pub page_marker: Option<PageId>,
    pub body: String,
}

/// Read-and-remove access to container contents, used only by the sweep.
///
/// The core never mounts content itself - page modules do that through
/// whatever handle the shell gives them.
pub trait DomHost: Send + Sync {
    /// Descendant fragments of a container, in mount order.
    fn fragments(&self, container: &ContainerId) -> Vec<Fragment>;

    /// Remove a single fragment. Removing an unknown id is a no-op.
    fn remove_fragment(&self, container: &ContainerId, id: FragmentId);
}

// =============================================================================
// History
// =============================================================================

/// Browser history abstraction.
///
/// Contract: every user-visible path change corresponds to exactly one
/// history entry. Back/forward navigations re-enter the controller with
/// replace semantics so the stack is never corrupted.
pub trait HistoryHost: Send + Sync {
    /// Append a new entry (forward navigation).
    fn push(&self, path: &NavPath);

    /// Overwrite the current entry (popstate and initial navigation).
    fn replace(&self, path: &NavPath);
}

// =============================================================================
// Session storage
// =============================================================================

/// Durable string key-value store scoped to the browser session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

// =============================================================================
// Menu
// =============================================================================

/// Menu highlighting. The core writes the active marker; it does not own
/// menu construction.
pub trait MenuHost: Send + Sync {
    fn set_active(&self, page_id: &PageId);
}
