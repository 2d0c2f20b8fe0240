//! Wallet balance logic.
//!
//! This module implements the wallet rules:
//! - Domain types for balance changes
//! - Validation of raw request input
//! - The balance mutation rule (convert, apply, overdraft guard)
//! - Error types for wallet operations

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use error::WalletError;
pub use service::BalanceService;
pub use types::{BalanceChange, Direction};
pub use validation::{RawBalanceChange, RawBalanceQuery, RawNewWallet};
