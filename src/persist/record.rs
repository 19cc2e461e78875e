//! Persisted route record - the short-lived survivor of a full reload.

use serde::{Deserialize, Serialize};

/// Snapshot of the active route captured just before unload.
///
/// Stored as JSON in session storage under a single key. Consumed and
/// deleted on the next load's restoration attempt; expires automatically if
/// unused past the validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedRouteRecord {
    pub path: String,
    pub page_id: String,
    pub captured_at_ms: u64,
}

impl PersistedRouteRecord {
    /// Whether the record is still inside the validity window at `now_ms`.
    pub fn is_fresh(&self, now_ms: u64, window_ms: u64) -> bool {
        now_ms.saturating_sub(self.captured_at_ms) <= window_ms
    }
}
