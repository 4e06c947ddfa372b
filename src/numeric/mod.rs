// ============================================================================
// Numeric Module
// Rounding primitives and error types for net income calculations
// ============================================================================
//
// This module provides:
// - round_half_up / round_half_up_decimal: floor-based half-up rounding
// - pow10_f64: power-of-ten multipliers (exact up to 10^22)
// - NumericError: Error types for argument and range failures
//
// Design principles:
// - All operations return Result (no panics)
// - One rounding rule for both f64 and rust_decimal::Decimal

mod errors;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use rounding::{
    pow10_f64, round_half_up, round_half_up_decimal, MAX_DECIMAL_PLACES, MAX_FLOAT_DECIMALS,
};
