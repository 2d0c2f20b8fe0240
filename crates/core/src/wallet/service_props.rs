//! Property-based tests for BalanceService.
//!
//! - Debits accumulate: final balance = initial + sum of converted amounts
//! - Covered credits succeed and never go negative
//! - Uncovered credits fail with InsufficientFunds, identically on retry

use proptest::prelude::*;
use rust_decimal::Decimal;
use wallet_shared::types::{Currency, WalletId, decimal};

use super::error::WalletError;
use super::service::BalanceService;
use super::types::{BalanceChange, Direction};
use crate::currency::{FixedRates, convert};

/// Strategy to generate positive amounts with 4 decimals (0.0001 to 1,000,000.0000).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to generate non-negative balances with 4 decimals.
fn balance() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Rub), Just(Currency::Usd)]
}

fn change(direction: Direction, amount: Decimal, currency: Currency) -> BalanceChange {
    BalanceChange {
        wallet_id: WalletId(1),
        direction,
        amount,
        currency,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any sequence of debits, the final balance is the initial balance
    /// plus the sum of the converted amounts.
    #[test]
    fn prop_debits_accumulate(
        initial in balance(),
        wallet_currency in currency(),
        debits in prop::collection::vec((positive_amount(), currency()), 1..20),
    ) {
        let mut running = initial;
        let mut expected = initial;

        for (amount, debit_currency) in &debits {
            let c = change(Direction::Debit, *amount, *debit_currency);
            running = BalanceService::apply(running, wallet_currency, &c, &FixedRates).unwrap();

            let converted = convert(*amount, *debit_currency, wallet_currency, &FixedRates).unwrap();
            expected = decimal::add(expected, converted).unwrap();
        }

        prop_assert_eq!(running, expected);
        prop_assert_eq!(running.scale(), 4);
    }

    /// For any credit covered by the balance, the result is balance - amount >= 0.
    #[test]
    fn prop_covered_credit_succeeds(
        balance in balance(),
        wallet_currency in currency(),
        fraction in 0u32..=100,
    ) {
        let amount = decimal::normalize(balance * Decimal::from(fraction) / Decimal::from(100));
        prop_assume!(amount > Decimal::ZERO);

        let c = change(Direction::Credit, amount, wallet_currency);
        let result = BalanceService::apply(balance, wallet_currency, &c, &FixedRates).unwrap();

        prop_assert_eq!(result, balance - amount);
        prop_assert!(result >= Decimal::ZERO);
    }

    /// For any credit above the balance, the result is InsufficientFunds, every time.
    #[test]
    fn prop_uncovered_credit_fails_idempotently(
        balance in balance(),
        excess in positive_amount(),
        wallet_currency in currency(),
    ) {
        let amount = balance + excess;
        let c = change(Direction::Credit, amount, wallet_currency);

        let first = BalanceService::apply(balance, wallet_currency, &c, &FixedRates);
        let second = BalanceService::apply(balance, wallet_currency, &c, &FixedRates);

        let is_insufficient = matches!(first, Err(WalletError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(first, second);
    }

    /// No credit in any currency ever yields a negative balance.
    #[test]
    fn prop_credit_never_negative(
        balance in balance(),
        amount in positive_amount(),
        wallet_currency in currency(),
        credit_currency in currency(),
    ) {
        let c = change(Direction::Credit, amount, credit_currency);
        if let Ok(result) = BalanceService::apply(balance, wallet_currency, &c, &FixedRates) {
            prop_assert!(result >= Decimal::ZERO);
        }
    }
}
