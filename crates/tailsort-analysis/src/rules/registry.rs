//! Identifier -> class list bindings recorded during one file pass.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Extracted class lists keyed by identifier. Later writes replace earlier ones.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ExtractionRegistry {
    entries: FxHashMap<String, Vec<String>>,
}

impl ExtractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `identifier -> classes`, returning the list it replaced.
    pub fn insert(&mut self, identifier: impl Into<String>, classes: Vec<String>) -> Option<Vec<String>> {
        let identifier = identifier.into();
        let previous = self.entries.insert(identifier.clone(), classes);
        if previous.is_some() {
            tracing::debug!(identifier = %identifier, "extraction identifier rebound");
        }
        previous
    }

    pub fn get(&self, identifier: &str) -> Option<&[String]> {
        self.entries.get(identifier).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
