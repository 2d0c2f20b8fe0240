//! Exchange rate sources.

use rust_decimal::Decimal;
use wallet_shared::types::Currency;

/// Rubles per US dollar.
pub const USD_RUB_RATE: Decimal = Decimal::from_parts(62, 0, 0, false, 0);

/// Supplies exchange rates to the converter.
///
/// A rate is the multiplier that turns one unit of `from` into `to`
/// (`1 USD * 62 = 62 RUB`). Sources only need to publish one direction of a
/// pair; the converter divides by the published rate for the other one.
pub trait RateSource: Send + Sync + std::fmt::Debug {
    /// Returns the direct rate for `from -> to`, if this source publishes one.
    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal>;
}

/// The built-in rate table: a single fixed USD/RUB rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRates;

impl RateSource for FixedRates {
    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        match (from, to) {
            (Currency::Usd, Currency::Rub) => Some(USD_RUB_RATE),
            _ => None,
        }
    }
}
