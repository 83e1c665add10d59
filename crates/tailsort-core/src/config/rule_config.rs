//! Options for the class-order rule.

use serde::{Deserialize, Serialize};

/// Attribute names matched when no user set is supplied.
pub const DEFAULT_CLASS_ATTRIBUTES: &[&str] = &["^class$", "^className$"];

/// Conventional class-joining helpers whose string arguments are class lists.
pub const DEFAULT_JOINING_FUNCTIONS: &[&str] =
    &["classnames", "classNames", "clsx", "cn", "cx", "twJoin", "twMerge"];

/// Marker prefix authors write inside a class list to request extraction.
pub const DEFAULT_IDENTIFIER_MARKER: &str = "id:";

/// A user-supplied set of attribute-name patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttributeMatchers {
    /// Regular expressions matched against the attribute name.
    pub patterns: Vec<String>,
    /// Replace the default set instead of extending it.
    pub overwrite: bool,
}

/// Configuration for the class-order rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleOptions {
    /// Explicit path to the class-order configuration. Relative paths are
    /// resolved against the analysis root.
    pub config_path: Option<String>,
    /// Which attributes hold class lists.
    pub class_attributes: Option<AttributeMatchers>,
    /// Call names whose arguments are class lists.
    pub joining_functions: Option<Vec<String>>,
    /// Extraction marker prefix. Default: `id:`.
    pub identifier_marker: Option<String>,
}

impl RuleOptions {
    /// Attribute-name patterns after applying the overwrite flag.
    pub fn effective_attribute_patterns(&self) -> Vec<String> {
        match &self.class_attributes {
            Some(m) if m.overwrite => m.patterns.clone(),
            Some(m) => DEFAULT_CLASS_ATTRIBUTES
                .iter()
                .map(|p| p.to_string())
                .chain(m.patterns.iter().cloned())
                .collect(),
            None => DEFAULT_CLASS_ATTRIBUTES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Returns the configured joining functions, defaulting to the
    /// conventional allow-list.
    pub fn effective_joining_functions(&self) -> Vec<String> {
        match &self.joining_functions {
            Some(names) => names.clone(),
            None => DEFAULT_JOINING_FUNCTIONS.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Returns the extraction marker, defaulting to `id:`.
    pub fn effective_identifier_marker(&self) -> &str {
        self.identifier_marker
            .as_deref()
            .unwrap_or(DEFAULT_IDENTIFIER_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attribute_patterns() {
        let options = RuleOptions::default();
        assert_eq!(
            options.effective_attribute_patterns(),
            vec!["^class$".to_string(), "^className$".to_string()]
        );
    }

    #[test]
    fn test_attribute_patterns_extend_by_default() {
        let options = RuleOptions {
            class_attributes: Some(AttributeMatchers {
                patterns: vec!["^tw$".to_string()],
                overwrite: false,
            }),
            ..Default::default()
        };
        assert_eq!(options.effective_attribute_patterns().len(), 3);
    }

    #[test]
    fn test_attribute_patterns_overwrite() {
        let options = RuleOptions {
            class_attributes: Some(AttributeMatchers {
                patterns: vec![".*ClassName$".to_string()],
                overwrite: true,
            }),
            ..Default::default()
        };
        assert_eq!(options.effective_attribute_patterns(), vec![".*ClassName$".to_string()]);
    }

    #[test]
    fn test_joining_functions_default() {
        let names = RuleOptions::default().effective_joining_functions();
        assert!(names.iter().any(|n| n == "clsx"));
        assert!(names.iter().any(|n| n == "twMerge"));
    }
}
