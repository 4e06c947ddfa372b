// ============================================================================
// Income Configuration
// Precision and input policy for net income calculations
// ============================================================================

use crate::numeric::{NumericError, NumericResult, MAX_FLOAT_DECIMALS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of decimal places (cents-level rounding)
pub const DEFAULT_DECIMALS: i32 = 2;

// ============================================================================
// Non-Finite Policy
// ============================================================================

/// How NaN and infinite revenues/expenses are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonFinitePolicy {
    /// Reject non-finite inputs and non-finite results
    /// - NaN or infinite input: `NonFiniteInput`
    /// - Finite inputs with an infinite difference: `Overflow`
    #[default]
    Reject,

    /// Let IEEE arithmetic carry NaN and infinities through to the result
    /// Only the precision is validated
    Propagate,
}

// ============================================================================
// Complete Income Configuration
// ============================================================================

/// Configuration for a [`NetIncomeCalculator`](crate::calculator::NetIncomeCalculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IncomeConfig {
    /// Number of decimal places kept in the result
    pub decimals: i32,

    /// Treatment of NaN and infinite inputs
    pub non_finite: NonFinitePolicy,
}

impl Default for IncomeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS)
    }
}

impl IncomeConfig {
    /// Create a new configuration with the given precision
    pub const fn new(decimals: i32) -> Self {
        Self {
            decimals,
            non_finite: NonFinitePolicy::Reject,
        }
    }

    /// Builder method: Set precision
    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Builder method: Set non-finite policy
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `decimals` is negative or above
    /// [`MAX_FLOAT_DECIMALS`].
    pub fn validate(&self) -> NumericResult<()> {
        if self.decimals < 0 || self.decimals > MAX_FLOAT_DECIMALS {
            return Err(NumericError::InvalidArgument);
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl IncomeConfig {
    /// Cents-level rounding (2 decimals)
    pub const fn cents() -> Self {
        Self::new(2)
    }

    /// Whole currency units (0 decimals)
    pub const fn whole_units() -> Self {
        Self::new(0)
    }

    /// Basis-point style precision (4 decimals)
    pub const fn basis_points() -> Self {
        Self::new(4)
    }
}
