//! Exact fixed-point arithmetic at 4 fractional digits.
//!
//! Every result is truncated toward zero to [`SCALE`] places at computation
//! time, so chained operations (convert, then add) stay reproducible. The
//! scale is also padded, which keeps `10` rendering as `"10.0000"`.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits carried by every monetary value.
pub const SCALE: u32 = 4;

/// Largest amount or balance the ledger holds: `99999999999999999999.9999`.
///
/// Fits the `NUMERIC(24, 4)` balance column. Sixty-two times this value plus
/// this value still fits a `Decimal`, so converting and then adding two
/// in-range values cannot overflow.
pub const MAX_VALUE: Decimal = Decimal::from_parts(2_701_131_775, 466_537_709, 54_210, false, SCALE);

/// Arithmetic faults. Both are internal errors, never user input problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Result does not fit in a `Decimal`.
    #[error("Decimal overflow")]
    Overflow,

    /// Divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Truncates `value` to [`SCALE`] places and pads it to exactly that scale.
#[must_use]
pub fn normalize(value: Decimal) -> Decimal {
    let mut truncated = value.round_dp_with_strategy(SCALE, RoundingStrategy::ToZero);
    truncated.rescale(SCALE);
    if truncated.is_zero() {
        truncated.set_sign_positive(true);
    }
    truncated
}

/// `a + b`, truncated.
pub fn add(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    a.checked_add(b)
        .map(normalize)
        .ok_or(DecimalError::Overflow)
}

/// `a - b`, truncated. The result may be negative; callers decide what that means.
pub fn subtract(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    a.checked_sub(b)
        .map(normalize)
        .ok_or(DecimalError::Overflow)
}

/// `a * b`, truncated.
pub fn multiply(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    a.checked_mul(b)
        .map(normalize)
        .ok_or(DecimalError::Overflow)
}

/// `a / b`, truncated.
pub fn divide(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    if b.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }
    a.checked_div(b)
        .map(normalize)
        .ok_or(DecimalError::Overflow)
}

/// Compares two values numerically; scale is ignored (`1.0 == 1.0000`).
#[must_use]
pub fn compare(a: Decimal, b: Decimal) -> Ordering {
    a.cmp(&b)
}
