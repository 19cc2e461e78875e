//! Refresh persistence.
//!
//! Captures the active route immediately before unload and restores it on
//! the next load, before any default-route bootstrap logic runs. A fresh
//! record overrides the default route; a stale, corrupt or absent record
//! changes nothing.

mod record;

pub use record::PersistedRouteRecord;

use std::sync::Arc;
use std::time::Duration;

use crate::core::{ActivePageState, NavPath, epoch_ms};
use crate::debug;
use crate::host::SessionStore;

/// Storage key for the route record. The only key this core owns.
pub const ROUTE_RECORD_KEY: &str = "wayline.route";

/// Default validity window for a captured route.
pub const DEFAULT_PERSIST_WINDOW: Duration = Duration::from_millis(15_000);

/// Capture/restore of the active route across a full page reload.
pub struct RefreshPersistence {
    store: Arc<dyn SessionStore>,
    window: Duration,
}

impl RefreshPersistence {
    pub fn new(store: Arc<dyn SessionStore>, window: Duration) -> Self {
        Self { store, window }
    }

    /// Snapshot the active route into session storage (the unload hook).
    /// Does nothing while no page is active.
    pub fn capture(&self, state: &ActivePageState) {
        self.capture_at(state, epoch_ms());
    }

    /// `capture` with an explicit clock, for tests.
    pub fn capture_at(&self, state: &ActivePageState, now_ms: u64) {
        let (Some(path), Some(page_id)) = (state.current_path(), state.current_page_id()) else {
            return;
        };
        let record = PersistedRouteRecord {
            path: path.as_str().to_string(),
            page_id: page_id.as_str().to_string(),
            captured_at_ms: now_ms,
        };
        match serde_json::to_string(&record) {
            Ok(json) => self.store.set(ROUTE_RECORD_KEY, json),
            Err(err) => debug!("persist"; "failed to encode route record: {}", err),
        }
    }

    /// Consume the persisted record and return its path if still fresh.
    ///
    /// Delete-on-read: the record is removed whether it is fresh, stale or
    /// corrupt, so it can never influence a second load. Corrupt records
    /// are treated as absent, never as fatal.
    pub fn restore(&self) -> Option<NavPath> {
        self.restore_at(epoch_ms())
    }

    /// `restore` with an explicit clock, for tests.
    pub fn restore_at(&self, now_ms: u64) -> Option<NavPath> {
        let raw = self.store.get(ROUTE_RECORD_KEY)?;
        self.store.remove(ROUTE_RECORD_KEY);

        let record: PersistedRouteRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                debug!("persist"; "discarding unparseable route record: {}", err);
                return None;
            }
        };

        if !record.is_fresh(now_ms, self.window.as_millis() as u64) {
            debug!("persist"; "discarding stale route record for `{}`", record.path);
            return None;
        }

        Some(NavPath::new(&record.path))
    }
}

// =============================================================================
// Tests
// =============================================================================
