// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod statement;

pub use config::{IncomeConfig, NonFinitePolicy, DEFAULT_DECIMALS};
pub use statement::{IncomeStatement, Profitability};
