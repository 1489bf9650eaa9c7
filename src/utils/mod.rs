//! Shared utilities.

pub mod bootstrap;

pub use bootstrap::{init_tracing, try_init_tracing};
