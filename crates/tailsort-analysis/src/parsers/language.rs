//! Language detection and parsing for files that can carry JSX markup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tailsort_core::errors::ParseError;
use tree_sitter::{Parser, Tree};

/// Languages whose sources may contain class-bearing JSX attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    /// Detect language from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Returns all file extensions associated with this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::TypeScript => &["ts", "tsx", "mts", "cts"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Get the tree-sitter grammar, with TSX handling for `.tsx` files.
    ///
    /// The JavaScript grammar parses JSX natively; plain `.ts` files use the
    /// TypeScript grammar, which has no JSX (angle brackets are type assertions).
    pub fn ts_language_for_ext(&self, ext: Option<&str>) -> tree_sitter::Language {
        match self {
            Language::TypeScript if ext == Some("tsx") => {
                tree_sitter_typescript::LANGUAGE_TSX.into()
            }
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `source` with the grammar selected by `path`'s extension.
pub fn parse_source(path: &Path, source: &str) -> Result<(Language, Tree), ParseError> {
    let ext = path.extension().and_then(|e| e.to_str());
    let language = Language::from_extension(ext).ok_or_else(|| ParseError::UnsupportedLanguage {
        extension: ext.unwrap_or_default().to_string(),
    })?;

    let mut parser = Parser::new();
    parser
        .set_language(&language.ts_language_for_ext(ext))
        .map_err(|e| ParseError::TreeSitterError {
            path: path.to_path_buf(),
            message: format!("failed to set language: {e}"),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::TreeSitterError {
            path: path.to_path_buf(),
            message: "parser returned no tree".to_string(),
        })?;

    Ok((language, tree))
}
