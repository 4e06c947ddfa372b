// ============================================================================
// Net Income Library
// Revenues minus expenses, rounded with floor-based round half-up
// ============================================================================

//! # Net Income
//!
//! Computes net income (revenues minus expenses) rounded to a configurable
//! number of decimal places:
//!
//! ```text
//! floor((revenues - expenses) * 10^decimals + 0.5) / 10^decimals
//! ```
//!
//! ## Features
//!
//! - **Floor-based round half-up**: halfway values move toward positive
//!   infinity, for losses as well as profits
//! - **Exact decimal variant** built on `rust_decimal`
//! - **Explicit errors** for negative precision and non-finite inputs
//! - **Event handlers** for auditing each calculation
//!
//! ## Example
//!
//! ```rust
//! use net_income::prelude::*;
//! use std::sync::Arc;
//!
//! // Free function, two decimals by default
//! assert_eq!(net_income(1000.0, 400.0).unwrap(), 600.0);
//!
//! // Configured calculator with whole-unit precision
//! let calculator = NetIncomeCalculator::new(
//!     IncomeConfig::whole_units(),
//!     Arc::new(LoggingEventHandler),
//! )
//! .unwrap();
//!
//! let statement = IncomeStatement::new(10.0, 3.0);
//! assert_eq!(calculator.compute_statement(&statement).unwrap(), 7.0);
//! assert_eq!(calculator.classify(&statement).unwrap(), Profitability::Profit);
//!
//! // Negative precision is rejected
//! assert_eq!(
//!     compute_net_income(10.0, 3.0, -1),
//!     Err(NumericError::InvalidArgument)
//! );
//! ```

pub mod calculator;
pub mod domain;
pub mod interfaces;
pub mod numeric;

pub use calculator::{compute_net_income, compute_net_income_decimal};

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{
        compute_net_income, compute_net_income_decimal, compute_net_income_with, net_income,
        NetIncomeCalculator,
    };
    pub use crate::domain::{
        IncomeConfig, IncomeStatement, NonFinitePolicy, Profitability, DEFAULT_DECIMALS,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericResult};
}
