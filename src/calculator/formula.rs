// ============================================================================
// Net Income Formula
// Revenues - Expenses = Net Income, rounded with floor-based half-up
// ============================================================================
//
// result = floor((revenues - expenses) * 10^decimals + 0.5) / 10^decimals
//
// A negative result is a loss. Halfway values round toward positive
// infinity on both sides of zero, so swapping revenues and expenses can
// move the result by one unit in the last place:
//
//     compute_net_income(0.0, 0.5, 0) ==  0.0
//     compute_net_income(0.5, 0.0, 0) ==  1.0

use crate::domain::{IncomeConfig, NonFinitePolicy, DEFAULT_DECIMALS};
use crate::numeric::{
    round_half_up, round_half_up_decimal, NumericError, NumericResult, MAX_DECIMAL_PLACES,
};
use rust_decimal::Decimal;

/// Compute net income rounded to `decimals` places.
///
/// Non-finite inputs are rejected. See [`compute_net_income_with`] to let
/// them propagate instead.
///
/// # Errors
/// - `InvalidArgument` if `decimals` is negative or above 308
/// - `NonFiniteInput` if either input is NaN or infinite
/// - `Overflow` if the difference or its scaled value is not finite
///
/// # Example
/// ```
/// use net_income::calculator::compute_net_income;
///
/// assert_eq!(compute_net_income(1000.0, 400.0, 2).unwrap(), 600.0);
/// assert_eq!(compute_net_income(10.0, 3.0, 0).unwrap(), 7.0);
/// ```
#[inline]
pub fn compute_net_income(revenues: f64, expenses: f64, decimals: i32) -> NumericResult<f64> {
    compute_net_income_with(revenues, expenses, IncomeConfig::new(decimals))
}

/// Compute net income at the default precision of two decimals.
#[inline]
pub fn net_income(revenues: f64, expenses: f64) -> NumericResult<f64> {
    compute_net_income(revenues, expenses, DEFAULT_DECIMALS)
}

/// Compute net income using the precision and non-finite policy of `config`.
///
/// Under [`NonFinitePolicy::Propagate`] only `decimals` is checked and NaN
/// or infinities come back unchanged from the arithmetic.
pub fn compute_net_income_with(
    revenues: f64,
    expenses: f64,
    config: IncomeConfig,
) -> NumericResult<f64> {
    // Reject a bad precision before looking at the inputs
    config.validate()?;

    let reject = config.non_finite == NonFinitePolicy::Reject;
    if reject && !(revenues.is_finite() && expenses.is_finite()) {
        return Err(NumericError::NonFiniteInput);
    }

    let rounded = round_half_up(revenues - expenses, config.decimals)?;

    if reject && !rounded.is_finite() {
        return Err(NumericError::Overflow);
    }

    Ok(rounded)
}

/// Compute net income exactly in base-10 arithmetic.
///
/// Same floor-based half-up rule as [`compute_net_income`], without binary
/// representation error: `1000 - 400.555` at two decimals is `599.45`.
///
/// # Errors
/// - `InvalidArgument` if `decimals` exceeds [`MAX_DECIMAL_PLACES`]
/// - `Overflow` if the subtraction or rounding overflows
pub fn compute_net_income_decimal(
    revenues: Decimal,
    expenses: Decimal,
    decimals: u32,
) -> NumericResult<Decimal> {
    if decimals > MAX_DECIMAL_PLACES {
        return Err(NumericError::InvalidArgument);
    }

    let raw = revenues
        .checked_sub(expenses)
        .ok_or(NumericError::Overflow)?;

    round_half_up_decimal(raw, decimals)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        assert_eq!(net_income(1000.0, 400.0).unwrap(), 600.0);
        assert_eq!(
            net_income(1000.0, 400.0).unwrap(),
            compute_net_income(1000.0, 400.0, 2).unwrap()
        );
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(compute_net_income(0.0, 0.0, 0).unwrap(), 0.0);
        assert_eq!(compute_net_income(10.0, 3.0, 0).unwrap(), 7.0);
    }

    #[test]
    fn test_binary_representation_of_inputs() {
        // 1000.0 - 400.555 == 599.4449999999999...
        assert_eq!(compute_net_income(1000.0, 400.555, 2).unwrap(), 599.44);

        // 100.0 - 100.005 == -0.0049999999999954...
        let result = compute_net_income(100.0, 100.005, 2).unwrap();
        assert_eq!(result, 0.0);
        assert!(result.is_sign_positive());
    }

    #[test]
    fn test_loss() {
        assert_eq!(compute_net_income(5.0, 7.25, 1).unwrap(), -2.2);
        assert_eq!(compute_net_income(1.0, 3.5, 0).unwrap(), -2.0);
        assert_eq!(compute_net_income(0.0, 1.5, 0).unwrap(), -1.0);
    }

    #[test]
    fn test_halfway_asymmetry() {
        assert_eq!(compute_net_income(0.0, 0.5, 0).unwrap(), 0.0);
        assert_eq!(compute_net_income(0.5, 0.0, 0).unwrap(), 1.0);

        assert_eq!(compute_net_income(0.125, 0.0, 2).unwrap(), 0.13);
        assert_eq!(compute_net_income(0.0, 0.125, 2).unwrap(), -0.12);
    }

    #[test]
    fn test_higher_precision() {
        assert_eq!(compute_net_income(1234.5678, 0.0, 3).unwrap(), 1234.568);
        assert_eq!(compute_net_income(0.1 + 0.2, 0.0, 1).unwrap(), 0.3);
    }

    #[test]
    fn test_precision_beyond_exact_multipliers() {
        assert_eq!(
            compute_net_income(0.25778604727410004, 0.0, 25).unwrap(),
            0.2577860472741001
        );
        assert_eq!(
            compute_net_income(100.0, 368.6, 23).unwrap(),
            -268.59999999999997
        );
    }

    #[test]
    fn test_negative_decimals_rejected() {
        assert_eq!(
            compute_net_income(100.0, 25.0, -1),
            Err(NumericError::InvalidArgument)
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            compute_net_income(f64::NAN, 1.0, 2),
            Err(NumericError::NonFiniteInput)
        );
        assert_eq!(
            compute_net_income(1.0, f64::INFINITY, 2),
            Err(NumericError::NonFiniteInput)
        );
        // Precision is checked before inputs
        assert_eq!(
            compute_net_income(f64::NAN, 1.0, -3),
            Err(NumericError::InvalidArgument)
        );
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            compute_net_income(f64::MAX, -f64::MAX, 0),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            compute_net_income(1e300, 0.0, 10),
            Err(NumericError::Overflow)
        );
        assert_eq!(compute_net_income(1e300, 0.0, 2).unwrap(), 1e300);
    }

    #[test]
    fn test_propagate_policy() {
        let config = IncomeConfig::cents().with_non_finite(NonFinitePolicy::Propagate);

        assert!(compute_net_income_with(f64::NAN, 1.0, config)
            .unwrap()
            .is_nan());
        assert_eq!(
            compute_net_income_with(f64::INFINITY, 1.0, config).unwrap(),
            f64::INFINITY
        );
        assert!(compute_net_income_with(f64::INFINITY, f64::INFINITY, config)
            .unwrap()
            .is_nan());
        assert_eq!(
            compute_net_income_with(f64::MAX, -f64::MAX, config).unwrap(),
            f64::INFINITY
        );
        assert_eq!(
            compute_net_income_with(1.0, 2.0, config.with_decimals(-1)),
            Err(NumericError::InvalidArgument)
        );
    }

    #[test]
    fn test_decimal_exact() {
        let revenues = Decimal::new(1000, 0);
        let expenses = Decimal::new(400_555, 3); // 400.555
        assert_eq!(
            compute_net_income_decimal(revenues, expenses, 2).unwrap(),
            Decimal::new(59_945, 2)
        );

        let revenues = Decimal::new(100, 0);
        let expenses = Decimal::new(100_005, 3); // 100.005
        assert_eq!(
            compute_net_income_decimal(revenues, expenses, 2).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_decimal_negative_halfway() {
        let result =
            compute_net_income_decimal(Decimal::ZERO, Decimal::new(25, 1), 0).unwrap();
        assert_eq!(result, Decimal::new(-2, 0));
    }

    #[test]
    fn test_decimal_errors() {
        assert_eq!(
            compute_net_income_decimal(Decimal::ONE, Decimal::ONE, MAX_DECIMAL_PLACES + 1),
            Err(NumericError::InvalidArgument)
        );
        assert_eq!(
            compute_net_income_decimal(Decimal::MAX, Decimal::MIN, 2),
            Err(NumericError::Overflow)
        );
    }
}
