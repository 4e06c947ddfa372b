// ============================================================================
// Calculator Module
// Contains the net income formula and the configured calculator
// ============================================================================

mod formula;
mod net_income_calculator;

pub use formula::{
    compute_net_income, compute_net_income_decimal, compute_net_income_with, net_income,
};
pub use net_income_calculator::NetIncomeCalculator;
