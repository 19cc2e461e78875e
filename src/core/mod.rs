//! Core types - pure abstractions shared across the codebase.

mod error;
mod id;
mod state;

pub use error::NavError;
pub use id::{ContainerId, NavPath, PageId};
pub use state::{ActivePageState, epoch_ms};
