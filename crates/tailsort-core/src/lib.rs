//! tailsort-core: shared foundation for the tailsort class-order engine.
//!
//! - `errors`: one `thiserror` enum per subsystem plus stable error codes
//! - `config`: TOML configuration with layered resolution
//! - `tracing`: subscriber setup driven by `TAILSORT_LOG`

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{RuleOptions, TailsortConfig};
