//! Logging setup: `tracing` with an `EnvFilter` read from `TAILSORT_LOG`.

pub mod setup;

pub use setup::{env_filter, init_tracing, DEFAULT_DIRECTIVES, LOG_ENV};
