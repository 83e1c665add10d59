//! Seams between the rule pipeline and whatever engine knows the canonical order.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tailsort_core::errors::OracleError;

/// Assigns canonical ranks to class tokens.
pub trait OrderOracle: Send + Sync {
    /// One rank per input class, in input order. `None` marks a class the
    /// oracle does not recognize.
    fn class_order(&self, classes: &[&str]) -> Vec<Option<u64>>;

    fn name(&self) -> &'static str {
        "oracle"
    }
}

/// Builds an ordering context from a configuration file.
pub trait OracleLoader: Send + Sync {
    fn load(&self, config_path: &Path) -> Result<OrderContext, OracleError>;
}

/// A ready ordering context, bound to the configuration it was built from.
/// Cloning shares the underlying oracle.
#[derive(Clone)]
pub struct OrderContext {
    config_path: PathBuf,
    oracle: Arc<dyn OrderOracle>,
}

impl OrderContext {
    pub fn new(config_path: impl Into<PathBuf>, oracle: Arc<dyn OrderOracle>) -> Self {
        Self {
            config_path: config_path.into(),
            oracle,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn oracle(&self) -> &dyn OrderOracle {
        self.oracle.as_ref()
    }
}

impl fmt::Debug for OrderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderContext")
            .field("config_path", &self.config_path)
            .field("oracle", &self.oracle.name())
            .finish()
    }
}
