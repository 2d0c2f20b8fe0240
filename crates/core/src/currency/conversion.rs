//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy:
//! - Results are truncated toward zero to 4 decimal places
//! - Truncation happens here, at conversion time, not when displaying
//! - Converting back and forth therefore loses at most the truncated remainder

use rust_decimal::Decimal;
use thiserror::Error;
use wallet_shared::types::{Currency, DecimalError, decimal};

use super::rates::RateSource;

/// Conversion failures. Both indicate a configuration fault, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Neither direction of the pair has a published rate.
    #[error("Unsupported currency pair: {from} -> {to}")]
    UnsupportedPair {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// The rate arithmetic failed.
    #[error("Conversion arithmetic failed: {0}")]
    Arithmetic(#[from] DecimalError),
}

/// Converts `amount` from one currency into another.
///
/// Equal currencies are an identity conversion. Otherwise a direct rate is
/// multiplied in, or an inverse rate divided out.
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedPair`] when `rates` knows neither
/// direction of the pair.
pub fn convert(
    amount: Decimal,
    from: Currency,
    to: Currency,
    rates: &dyn RateSource,
) -> Result<Decimal, ConversionError> {
    if from == to {
        return Ok(decimal::normalize(amount));
    }

    if let Some(rate) = rates.rate(from, to) {
        return Ok(decimal::multiply(amount, rate)?);
    }

    if let Some(inverse) = rates.rate(to, from) {
        return Ok(decimal::divide(amount, inverse)?);
    }

    Err(ConversionError::UnsupportedPair { from, to })
}
