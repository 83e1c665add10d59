//! One analysis session over any number of files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tailsort_core::config::{RuleOptions, TailsortConfig};
use tailsort_core::errors::{ConfigError, ParseError, PipelineError};
use tree_sitter::Node;

use crate::oracle::{OracleLoader, OracleSession};
use crate::parsers::error_tolerant::{count_errors, is_in_error};
use crate::parsers::{parse_source, Language};
use crate::rules::types::apply_edits;
use crate::rules::{
    AttributeMatcher, AttributeNode, ClassOrderRule, Diagnostic, ExtractionRegistry,
    InsertionPoint, RuleContext,
};

/// Result of analyzing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub language: Language,
    pub diagnostics: Vec<Diagnostic>,
    /// Identifier bindings requested in this file.
    pub extractions: ExtractionRegistry,
    /// Class-like attributes the rule visited.
    pub attributes_visited: usize,
    /// ERROR/MISSING nodes in the parse; analysis still covers the rest.
    pub parse_errors: u32,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Source with every fix applied. Fix ranges within one pass are disjoint.
    pub fn apply_fixes(&self, source: &str) -> String {
        apply_edits(
            source,
            self.diagnostics
                .iter()
                .filter_map(|d| d.fix.as_ref())
                .flat_map(|f| f.edits.iter()),
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the class-order rule over files, sharing one oracle session.
pub struct ClassOrderEngine {
    matcher: AttributeMatcher,
    rule: ClassOrderRule,
    session: OracleSession,
}

impl ClassOrderEngine {
    /// Engine rooted at `root` using the built-in utility ordering.
    pub fn new(root: impl Into<PathBuf>, options: &RuleOptions) -> Result<Self, ConfigError> {
        Self::build(options, OracleSession::new(root))
    }

    pub fn with_loader(
        root: impl Into<PathBuf>,
        options: &RuleOptions,
        loader: Box<dyn OracleLoader>,
    ) -> Result<Self, ConfigError> {
        Self::build(options, OracleSession::with_loader(root, loader))
    }

    /// Engine from resolved configuration.
    pub fn from_config(root: impl Into<PathBuf>, config: &TailsortConfig) -> Result<Self, ConfigError> {
        Self::new(root, &config.rule)
    }

    fn build(options: &RuleOptions, session: OracleSession) -> Result<Self, ConfigError> {
        TailsortConfig::validate(&TailsortConfig {
            rule: options.clone(),
        })?;
        Ok(Self {
            matcher: AttributeMatcher::from_options(options)?,
            rule: ClassOrderRule::new(options),
            session,
        })
    }

    pub fn session(&self) -> &OracleSession {
        &self.session
    }

    /// Read and analyze a file.
    pub fn analyze_file(&mut self, path: &Path) -> Result<FileReport, PipelineError> {
        let source = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.analyze_source(path, &source)
    }

    /// Analyze `source` as the contents of `path`.
    pub fn analyze_source(&mut self, path: &Path, source: &str) -> Result<FileReport, PipelineError> {
        let (language, tree) = parse_source(path, source)?;
        let root = tree.root_node();
        let file = path.display().to_string();
        let parse_errors = count_errors(root);
        if parse_errors > 0 {
            tracing::debug!(file = %file, parse_errors, "partial parse; skipping erroneous regions");
        }

        let Self {
            matcher,
            rule,
            session,
        } = self;

        let mut registry = ExtractionRegistry::new();
        let mut ctx = RuleContext {
            file: &file,
            source,
            session,
            registry: &mut registry,
            insertion: InsertionPoint::after_last_statement(root, source.len()),
        };

        let mut diagnostics = Vec::new();
        let mut attributes_visited = 0;
        for attribute in class_attributes(root, source, matcher) {
            attributes_visited += 1;
            diagnostics.extend(rule.check_attribute(&attribute, &mut ctx));
        }

        tracing::debug!(
            file = %file,
            attributes = attributes_visited,
            diagnostics = diagnostics.len(),
            "file pass complete"
        );

        Ok(FileReport {
            file,
            language,
            diagnostics,
            extractions: registry,
            attributes_visited,
            parse_errors,
        })
    }
}

/// Matched attributes in source order. Matched attributes are not descended
/// into; attributes inside ERROR subtrees are skipped.
fn class_attributes<'tree>(
    root: Node<'tree>,
    source: &str,
    matcher: &AttributeMatcher,
) -> Vec<AttributeNode<'tree>> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind() == "jsx_attribute" && !node.is_error() && !is_in_error(&node) {
            if let Some(attribute) = AttributeNode::from_node(node, source) {
                if matcher.is_match(&attribute.name) {
                    found.push(attribute);
                    continue;
                }
            }
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    found
}
