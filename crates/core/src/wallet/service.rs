//! Balance mutation rule.
//!
//! Given the authoritative balance read under the row lock, decide what the
//! new balance is. The caller owns the lock, the persistence and the
//! commit/rollback; this service owns the arithmetic and the overdraft guard.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use wallet_shared::types::{Currency, decimal};

use super::error::WalletError;
use super::types::{BalanceChange, Direction};
use crate::currency::{RateSource, convert};

/// Balance service for wallet mutations.
pub struct BalanceService;

impl BalanceService {
    /// Computes the balance that results from applying `change`.
    ///
    /// 1. If the change is in another currency, convert the amount into
    ///    `wallet_currency`.
    /// 2. `Debit` adds the amount and fails if the result would exceed
    ///    [`decimal::MAX_VALUE`].
    /// 3. `Credit` subtracts it and fails if the result is below zero.
    ///
    /// Every step truncates to 4 decimal places.
    ///
    /// # Errors
    ///
    /// - [`WalletError::InsufficientFunds`] when a credit exceeds the balance
    /// - [`WalletError::LimitExceeded`] when a debit passes the ceiling
    /// - [`WalletError::Conversion`] when the currency pair has no rate
    /// - [`WalletError::Arithmetic`] on overflow
    pub fn apply(
        balance: Decimal,
        wallet_currency: Currency,
        change: &BalanceChange,
        rates: &dyn RateSource,
    ) -> Result<Decimal, WalletError> {
        let amount = Self::amount_in_wallet_currency(wallet_currency, change, rates)?;

        match change.direction {
            Direction::Debit => {
                let new_balance = decimal::add(balance, amount)?;
                if decimal::compare(new_balance, decimal::MAX_VALUE) == Ordering::Greater {
                    return Err(WalletError::LimitExceeded {
                        balance: decimal::normalize(balance),
                        requested: amount,
                        limit: decimal::MAX_VALUE,
                    });
                }
                Ok(new_balance)
            }
            Direction::Credit => {
                let new_balance = decimal::subtract(balance, amount)?;
                if decimal::compare(new_balance, Decimal::ZERO) == Ordering::Less {
                    return Err(WalletError::InsufficientFunds {
                        balance: decimal::normalize(balance),
                        requested: amount,
                    });
                }
                Ok(new_balance)
            }
        }
    }

    /// Converts the change amount into the wallet's currency when they differ.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Conversion`] when the pair is unsupported.
    pub fn amount_in_wallet_currency(
        wallet_currency: Currency,
        change: &BalanceChange,
        rates: &dyn RateSource,
    ) -> Result<Decimal, WalletError> {
        if change.currency == wallet_currency {
            return Ok(decimal::normalize(change.amount));
        }
        Ok(convert(change.amount, change.currency, wallet_currency, rates)?)
    }
}
