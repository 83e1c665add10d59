//! Top-level tailsort configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::RuleOptions;
use crate::errors::{ConfigError, TailsortErrorCode};

/// Project configuration file name, looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "tailsort.toml";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TAILSORT_*`)
/// 3. Project config (`tailsort.toml` in the project root)
/// 4. User config (`~/.tailsort/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TailsortConfig {
    pub rule: RuleOptions,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<String>,
    pub identifier_marker: Option<String>,
    pub joining_functions: Option<Vec<String>>,
}

impl TailsortConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::Malformed { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e.coded_string(),
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            origin: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TailsortConfig) -> Result<(), ConfigError> {
        if let Some(marker) = &config.rule.identifier_marker {
            if marker.is_empty() || marker.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidMarker {
                    marker: marker.clone(),
                });
            }
        }
        if let Some(names) = &config.rule.joining_functions {
            if let Some(bad) = names.iter().find(|n| n.trim().is_empty()) {
                return Err(ConfigError::BlankJoiningFunction { name: bad.clone() });
            }
        }
        for pattern in config.rule.effective_attribute_patterns() {
            if let Err(e) = regex::Regex::new(&pattern) {
                return Err(ConfigError::InvalidAttributePattern {
                    pattern,
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tailsort/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TailsortConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let file_config: TailsortConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                origin: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut TailsortConfig, other: &TailsortConfig) {
        if other.rule.config_path.is_some() {
            base.rule.config_path = other.rule.config_path.clone();
        }
        if other.rule.class_attributes.is_some() {
            base.rule.class_attributes = other.rule.class_attributes.clone();
        }
        if other.rule.joining_functions.is_some() {
            base.rule.joining_functions = other.rule.joining_functions.clone();
        }
        if other.rule.identifier_marker.is_some() {
            base.rule.identifier_marker = other.rule.identifier_marker.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TAILSORT_CONFIG_PATH`, `TAILSORT_IDENTIFIER_MARKER`,
    /// `TAILSORT_JOINING_FUNCTIONS` (comma-separated).
    fn apply_env_overrides(config: &mut TailsortConfig) {
        if let Ok(val) = std::env::var("TAILSORT_CONFIG_PATH") {
            if !val.is_empty() {
                config.rule.config_path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("TAILSORT_IDENTIFIER_MARKER") {
            config.rule.identifier_marker = Some(val);
        }
        if let Ok(val) = std::env::var("TAILSORT_JOINING_FUNCTIONS") {
            let names: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from)
                .collect();
            config.rule.joining_functions = Some(names);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TailsortConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.config_path {
            config.rule.config_path = Some(v.clone());
        }
        if let Some(ref v) = cli.identifier_marker {
            config.rule.identifier_marker = Some(v.clone());
        }
        if let Some(ref v) = cli.joining_functions {
            config.rule.joining_functions = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.tailsort/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".tailsort"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
