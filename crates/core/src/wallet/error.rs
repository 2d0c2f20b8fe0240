//! Wallet error types.
//!
//! Validation failures are reported separately as
//! [`ValidationErrors`](wallet_shared::ValidationErrors) before any of these
//! can occur; everything here happens inside the unit of work.

use rust_decimal::Decimal;
use thiserror::Error;
use wallet_shared::AppError;
use wallet_shared::types::{DecimalError, WalletId};

use crate::currency::ConversionError;

/// Errors that can occur while applying a balance change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Wallet does not exist.
    #[error("Wallet not found: {0}")]
    NotFound(WalletId),

    /// A credit would drive the balance below zero.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the attempt.
        balance: Decimal,
        /// Requested amount, in the wallet's currency.
        requested: Decimal,
    },

    /// A debit would lift the balance above the ledger ceiling.
    #[error("Balance limit exceeded: balance {balance}, requested {requested}, limit {limit}")]
    LimitExceeded {
        /// Balance at the time of the attempt.
        balance: Decimal,
        /// Requested amount, in the wallet's currency.
        requested: Decimal,
        /// Highest balance a wallet may hold.
        limit: Decimal,
    },

    /// The currency converter rejected the pair.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Balance arithmetic overflowed.
    #[error("Balance arithmetic failed: {0}")]
    Arithmetic(#[from] DecimalError),
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        let message = err.to_string();
        match err {
            WalletError::NotFound(_) => Self::NotFound(message),
            WalletError::InsufficientFunds { .. } => Self::InsufficientFunds(message),
            WalletError::LimitExceeded { .. } => Self::LimitExceeded(message),
            WalletError::Conversion(_) => Self::Conversion(message),
            WalletError::Arithmetic(_) => Self::Internal(message),
        }
    }
}
