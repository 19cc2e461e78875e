//! Navigation error taxonomy.
//!
//! None of these escape the lifecycle controller as a crash: every variant is
//! recovered by falling back to the default route (or, for registration
//! errors, surfaced at bootstrap before any navigation can run).

use std::time::Duration;

use thiserror::Error;

use super::{ContainerId, NavPath, PageId};

/// Navigation-related errors
#[derive(Debug, Error)]
pub enum NavError {
    /// No route entry matches the requested path.
    #[error("no route matches `{0}`")]
    RouteNotFound(NavPath),

    /// A navigation targeted a page id that no route entry carries.
    #[error("no route carries page `{0}`")]
    PageNotRouted(PageId),

    /// A route resolved to a page that was never registered.
    /// A configuration defect, not a runtime condition.
    #[error("no module registered for page `{0}`")]
    ModuleNotFound(PageId),

    /// Bootstrap tried to bind the same page id twice.
    #[error("page `{0}` is already registered")]
    DuplicateRegistration(PageId),

    /// Another claim on the container is outstanding and still fresh.
    #[error("container `{0}` is busy")]
    ContainerBusy(ContainerId),

    /// The page module's `load()` returned an error.
    #[error("module for page `{page}` failed to load")]
    ModuleLoadFailure {
        page: PageId,
        #[source]
        source: anyhow::Error,
    },

    /// The page module's `load()` did not resolve within the load timeout.
    #[error("module for page `{0}` timed out after {1:?}")]
    LoadTimeout(PageId, Duration),
}
