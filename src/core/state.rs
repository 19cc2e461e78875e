//! Active page state.
//!
//! One explicit state object owned by the lifecycle controller and injected
//! where needed - never an ambient global. Mutated only by the controller.

use std::time::SystemTime;

use super::{NavPath, PageId};

/// Milliseconds since the Unix epoch.
pub fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Which page currently owns the display.
///
/// Invariant: `is_rendering` is true only between the start and completion of
/// a single render call. The serialized navigation queue guarantees no second
/// render begins while it is set.
#[derive(Debug, Default)]
pub struct ActivePageState {
    current_page_id: Option<PageId>,
    current_path: Option<NavPath>,
    last_transition_ms: u64,
    is_rendering: bool,
}

impl ActivePageState {
    /// Fresh state with no active page (pre-bootstrap).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page_id(&self) -> Option<&PageId> {
        self.current_page_id.as_ref()
    }

    pub fn current_path(&self) -> Option<&NavPath> {
        self.current_path.as_ref()
    }

    pub fn last_transition_ms(&self) -> u64 {
        self.last_transition_ms
    }

    pub fn is_rendering(&self) -> bool {
        self.is_rendering
    }

    /// Mark a render call as in flight.
    pub(crate) fn begin_render(&mut self) {
        debug_assert!(!self.is_rendering, "render started while one in flight");
        self.is_rendering = true;
    }

    /// Mark the in-flight render call as complete (success or failure).
    pub(crate) fn finish_render(&mut self) {
        self.is_rendering = false;
    }

    /// Record a completed transition to `page_id` at `path`.
    pub(crate) fn record_transition(&mut self, page_id: PageId, path: NavPath, now_ms: u64) {
        self.current_page_id = Some(page_id);
        self.current_path = Some(path);
        self.last_transition_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ActivePageState::new();
        assert!(state.current_page_id().is_none());
        assert!(state.current_path().is_none());
        assert!(!state.is_rendering());
        assert_eq!(state.last_transition_ms(), 0);
    }

    #[test]
    fn test_render_flag_lifecycle() {
        let mut state = ActivePageState::new();
        state.begin_render();
        assert!(state.is_rendering());
        state.finish_render();
        assert!(!state.is_rendering());
    }

    #[test]
    fn test_record_transition() {
        let mut state = ActivePageState::new();
        state.record_transition(PageId::new("kpi"), NavPath::new("/kpi"), 42);
        assert_eq!(state.current_page_id().unwrap().as_str(), "kpi");
        assert_eq!(state.current_path().unwrap().as_str(), "/kpi");
        assert_eq!(state.last_transition_ms(), 42);
    }
}
