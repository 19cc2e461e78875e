//! Render ownership guard.
//!
//! Guarantees at most one renderer per container at a time (lease
//! discipline) and that content belonging to another page never survives
//! inside the active page's container (sweep). This replaces the
//! detect-and-repair loops a shell would otherwise need: the wrong-content
//! condition cannot arise while the discipline holds.

mod lease;
mod sweep;

pub use lease::{Lease, RenderOwnershipGuard};
pub use sweep::sweep_container;
