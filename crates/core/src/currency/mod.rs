//! Currency conversion and exchange rates.

pub mod conversion;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::{ConversionError, convert};
pub use rates::{FixedRates, RateSource, USD_RUB_RATE};
