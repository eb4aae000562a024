//! Observability setup.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{env_filter, init_tracing};
