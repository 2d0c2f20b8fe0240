//! Property-based tests for currency conversion.
//!
//! - Conversion results always carry exactly 4 decimal places
//! - RUB -> USD -> RUB loses less than one truncated USD unit (0.0062 RUB)
//! - USD -> RUB -> USD is exact, since multiplying by 62 never truncates

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wallet_shared::types::Currency;

use super::conversion::convert;
use super::rates::FixedRates;

/// Strategy to generate positive amounts with 4 decimals (0.0001 to 10,000,000.0000).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any amount, a conversion result has scale 4 and is non-negative.
    #[test]
    fn prop_convert_has_scale_4(amount in positive_amount()) {
        for (from, to) in [(Currency::Rub, Currency::Usd), (Currency::Usd, Currency::Rub)] {
            let result = convert(amount, from, to, &FixedRates).unwrap();
            prop_assert_eq!(result.scale(), 4);
            prop_assert!(!result.is_sign_negative() || result.is_zero());
        }
    }

    /// For any amount, RUB -> USD -> RUB stays within the documented tolerance.
    #[test]
    fn prop_round_trip_rub_within_tolerance(amount in positive_amount()) {
        let usd = convert(amount, Currency::Rub, Currency::Usd, &FixedRates).unwrap();
        let back = convert(usd, Currency::Usd, Currency::Rub, &FixedRates).unwrap();

        let loss = amount - back;
        prop_assert!(loss >= Decimal::ZERO, "round trip must never gain: {} -> {}", amount, back);
        prop_assert!(loss < dec!(0.0062), "round trip lost {} on {}", loss, amount);
    }

    /// For any amount, USD -> RUB -> USD is exact.
    #[test]
    fn prop_round_trip_usd_exact(amount in positive_amount()) {
        let rub = convert(amount, Currency::Usd, Currency::Rub, &FixedRates).unwrap();
        let back = convert(rub, Currency::Rub, Currency::Usd, &FixedRates).unwrap();
        prop_assert_eq!(back, amount);
    }

    /// Conversion is monotonic: a larger amount never converts to a smaller one.
    #[test]
    fn prop_convert_is_monotonic(a in positive_amount(), b in positive_amount()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_usd = convert(low, Currency::Rub, Currency::Usd, &FixedRates).unwrap();
        let high_usd = convert(high, Currency::Rub, Currency::Usd, &FixedRates).unwrap();
        prop_assert!(low_usd <= high_usd);
    }
}
