//! Attribute-name matching.

use regex::{Regex, RegexSet};
use tailsort_core::config::RuleOptions;
use tailsort_core::errors::ConfigError;

/// Compiled set of attribute-name patterns.
#[derive(Debug, Clone)]
pub struct AttributeMatcher {
    set: RegexSet,
}

impl AttributeMatcher {
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(|p| p.as_ref().to_string()).collect();
        let set = RegexSet::new(&patterns).map_err(|e| {
            // RegexSet errors do not say which pattern failed.
            let pattern = patterns
                .iter()
                .find(|p| Regex::new(p).is_err())
                .cloned()
                .unwrap_or_default();
            ConfigError::InvalidAttributePattern {
                pattern,
                message: e.to_string(),
            }
        })?;
        Ok(Self { set })
    }

    pub fn from_options(options: &RuleOptions) -> Result<Self, ConfigError> {
        Self::new(options.effective_attribute_patterns())
    }

    pub fn is_match(&self, attribute_name: &str) -> bool {
        self.set.is_match(attribute_name)
    }
}

#[cfg(test)]
mod tests {
    use tailsort_core::config::AttributeMatchers;

    use super::*;

    #[test]
    fn test_defaults() {
        let m = AttributeMatcher::from_options(&RuleOptions::default()).unwrap();
        assert!(m.is_match("className"));
        assert!(m.is_match("class"));
        assert!(!m.is_match("classNames"));
        assert!(!m.is_match("id"));
    }

    #[test]
    fn test_extended_and_overwritten() {
        let extended = RuleOptions {
            class_attributes: Some(AttributeMatchers {
                patterns: vec![".*ClassName$".to_string()],
                overwrite: false,
            }),
            ..Default::default()
        };
        let m = AttributeMatcher::from_options(&extended).unwrap();
        assert!(m.is_match("className"));
        assert!(m.is_match("wrapperClassName"));

        let overwritten = RuleOptions {
            class_attributes: Some(AttributeMatchers {
                patterns: vec!["^tw$".to_string()],
                overwrite: true,
            }),
            ..Default::default()
        };
        let m = AttributeMatcher::from_options(&overwritten).unwrap();
        assert!(m.is_match("tw"));
        assert!(!m.is_match("className"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            AttributeMatcher::new(["^class$", "(unclosed"]),
            Err(ConfigError::InvalidAttributePattern { ref pattern, .. }) if pattern == "(unclosed"
        ));
    }
}
