//! Command-line interface module.

mod args;
pub mod routes;
pub mod simulate;
pub mod validate;

pub use args::{Cli, Commands};
