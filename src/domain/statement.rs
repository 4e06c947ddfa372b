// ============================================================================
// Income Statement Domain Model
// ============================================================================

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Revenues and expenses for one reporting period
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IncomeStatement {
    /// Cash inflow from sales or operations (may be negative for refunds)
    pub revenues: f64,

    /// Costs associated with generating the revenues
    pub expenses: f64,
}

impl IncomeStatement {
    /// Create a statement from period totals
    pub const fn new(revenues: f64, expenses: f64) -> Self {
        Self { revenues, expenses }
    }
}

/// Sign of a rounded net income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Profitability {
    /// Net income above zero
    Profit,
    /// Net income rounds to exactly zero
    BreakEven,
    /// Net income below zero
    Loss,
}

impl Profitability {
    /// Classify a rounded net income. Returns `None` for NaN.
    pub fn from_net_income(net_income: f64) -> Option<Self> {
        match net_income.partial_cmp(&0.0)? {
            Ordering::Greater => Some(Profitability::Profit),
            Ordering::Equal => Some(Profitability::BreakEven),
            Ordering::Less => Some(Profitability::Loss),
        }
    }
}
