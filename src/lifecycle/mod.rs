//! Route lifecycle - transition orchestration and the serialized queue.
//!
//! ```text
//! menu click / popstate / reload
//!            |
//!            v
//!   NavigatorHandle --NavMsg--> Navigator (one task, strict FIFO)
//!                                   |
//!                                   v
//!                        RouteLifecycleController
//!                  Idle -> Resolving -> Deactivating -> Activating -> Idle
//! ```
//!
//! The Navigator is a thin orchestrator: it owns the controller and replays
//! queued requests one at a time. The transition logic lives in `machine`.

mod machine;
mod navigator;

pub use machine::{RouteLifecycleController, ShellHosts};
pub use navigator::{Navigator, NavigatorHandle};
