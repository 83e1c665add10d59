//! Per-session ordering context cache.
//!
//! Resolution happens once per configured path; every context is built at
//! most once. Missing configuration and loader failures are sticky for the
//! session and never abort analysis.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tailsort_core::errors::{OracleError, TailsortErrorCode};

use super::resolve::resolve_config_path;
use super::traits::{OracleLoader, OrderContext};
use super::utility_order::UtilityOrderLoader;

/// Outcome of building a context for one resolved configuration path.
/// A path with no entry has not been attempted yet.
#[derive(Debug, Clone)]
pub enum ContextState {
    Ready(OrderContext),
    Failed,
}

/// Holds every ordering context built during one analysis session.
pub struct OracleSession {
    root: PathBuf,
    loader: Box<dyn OracleLoader>,
    /// Memoized path resolution, keyed by the explicit option it was resolved from.
    resolved: FxHashMap<Option<String>, Option<PathBuf>>,
    contexts: FxHashMap<PathBuf, ContextState>,
}

impl OracleSession {
    /// Session using the built-in utility ordering.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_loader(root, Box::new(UtilityOrderLoader))
    }

    pub fn with_loader(root: impl Into<PathBuf>, loader: Box<dyn OracleLoader>) -> Self {
        Self {
            root: root.into(),
            loader,
            resolved: FxHashMap::default(),
            contexts: FxHashMap::default(),
        }
    }

    /// Context for the given explicit configuration option, building it on
    /// first use. `None` when no configuration exists or building it failed.
    pub fn context(&mut self, config_path: Option<&str>) -> Option<OrderContext> {
        let path = self.resolve(config_path)?;

        if let Some(state) = self.contexts.get(&path) {
            return match state {
                ContextState::Ready(ctx) => Some(ctx.clone()),
                ContextState::Failed => None,
            };
        }

        let state = match self.loader.load(&path) {
            Ok(ctx) => {
                tracing::info!(config = %path.display(), "class-order context ready");
                ContextState::Ready(ctx)
            }
            Err(e) => {
                tracing::warn!(
                    config = %path.display(),
                    error = %e.coded_string(),
                    "class-order context unavailable; sorting disabled"
                );
                ContextState::Failed
            }
        };
        let ctx = match &state {
            ContextState::Ready(ctx) => Some(ctx.clone()),
            ContextState::Failed => None,
        };
        self.contexts.insert(path, state);
        ctx
    }

    /// State recorded for a resolved configuration path, if it was attempted.
    pub fn state(&self, path: &Path) -> Option<&ContextState> {
        self.contexts.get(path)
    }

    /// Number of context builds attempted so far.
    pub fn attempts(&self) -> usize {
        self.contexts.len()
    }

    fn resolve(&mut self, config_path: Option<&str>) -> Option<PathBuf> {
        let key = config_path.map(str::to_string);
        if let Some(resolved) = self.resolved.get(&key) {
            return resolved.clone();
        }

        let resolved = resolve_config_path(config_path, &self.root);
        if resolved.is_none() {
            let e = OracleError::ConfigNotFound {
                root: self.root.clone(),
            };
            tracing::warn!(
                explicit = config_path.unwrap_or("<none>"),
                "{}; class ordering disabled for this session",
                e.coded_string()
            );
        }
        self.resolved.insert(key, resolved.clone());
        resolved
    }
}
