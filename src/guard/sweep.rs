//! Cross-page content sweep.
//!
//! After a page activates, any fragment in its container whose marker names
//! a *different* page is leftover from a lost render race and gets removed.
//! Unmarked fragments (shell chrome, loading placeholders) are not the
//! core's to touch.

use crate::core::{ContainerId, PageId};
use crate::debug;
use crate::host::DomHost;

/// Remove fragments not belonging to `active` from `container`.
///
/// Returns the number of fragments removed. Read-then-conditionally-mutate,
/// confined to the given container; sibling containers are never scanned.
pub fn sweep_container(dom: &dyn DomHost, container: &ContainerId, active: &PageId) -> usize {
    let mut removed = 0;
    for fragment in dom.fragments(container) {
        let Some(owner) = &fragment.page_marker else {
            continue;
        };
        if owner != active {
            dom.remove_fragment(container, fragment.id);
            removed += 1;
        }
    }
    if removed > 0 {
        debug!("guard"; "swept {} stale fragment(s) from `{}`", removed, container);
    }
    removed
}

// =============================================================================
// Tests
// =============================================================================
