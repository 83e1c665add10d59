//! Order oracle adapter: locating the class-order configuration, building an
//! ordering context once per session, and sorting class lists with it.

pub mod resolve;
pub mod session;
pub mod sort;
pub mod traits;
pub mod utility_order;

pub use resolve::{resolve_config_path, CONVENTIONAL_CONFIG_FILES};
pub use session::{ContextState, OracleSession};
pub use sort::sort_class_list;
pub use traits::{OracleLoader, OrderContext, OrderOracle};
pub use utility_order::{UtilityOrder, UtilityOrderLoader, UtilitySettings};
