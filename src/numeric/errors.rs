// ============================================================================
// Numeric Errors
// Error types for net income arithmetic and rounding
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while computing a rounded net income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Precision argument is negative or too large to scale by
    InvalidArgument,
    /// Revenues or expenses is NaN or infinite
    NonFiniteInput,
    /// Finite inputs produced a result outside the representable range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => write!(
                f,
                "invalid argument: decimals must be a non-negative supported precision"
            ),
            NumericError::NonFiniteInput => {
                write!(f, "non-finite input: revenues and expenses must be finite")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded representable range"
        );
        assert!(NumericError::InvalidArgument
            .to_string()
            .starts_with("invalid argument"));
        assert!(NumericError::NonFiniteInput
            .to_string()
            .contains("must be finite"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::InvalidArgument);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::NonFiniteInput);
        assert!(err.source().is_none());
    }
}
