//! Configuration system for tailsort.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod rule_config;
pub mod tailsort_config;

pub use rule_config::{AttributeMatchers, RuleOptions};
pub use tailsort_config::{CliOverrides, TailsortConfig};
