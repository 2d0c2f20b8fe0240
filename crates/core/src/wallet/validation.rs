//! Validation of raw wallet requests.
//!
//! The request surface hands over every field as an optional string so that
//! a bad value becomes a field error here instead of a deserialization
//! failure. Every field is checked before reporting, and nothing in this
//! module touches storage.

use std::str::FromStr;

use rust_decimal::Decimal;
use wallet_shared::ValidationErrors;
use wallet_shared::types::{Currency, WalletId, decimal};

use super::types::{BalanceChange, Direction};

/// Unvalidated input for a balance change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBalanceChange {
    /// Wallet id, as sent.
    pub wallet_id: Option<String>,
    /// `"debit"` or `"credit"`.
    pub transaction_type: Option<String>,
    /// Decimal amount, as sent.
    pub amount: Option<String>,
    /// Currency code, as sent.
    pub currency: Option<String>,
}

/// Unvalidated input for wallet creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNewWallet {
    /// Currency code, as sent.
    pub currency: Option<String>,
}

/// Unvalidated input for a balance read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBalanceQuery {
    /// Wallet id, as sent.
    pub wallet_id: Option<String>,
}

impl RawBalanceChange {
    /// Validates every field and builds a [`BalanceChange`].
    ///
    /// # Errors
    ///
    /// Returns all field errors found.
    pub fn validate(&self) -> Result<BalanceChange, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let wallet_id = wallet_id_field(self.wallet_id.as_deref(), &mut errors);
        let direction = direction_field(self.transaction_type.as_deref(), &mut errors);
        let amount = amount_field(self.amount.as_deref(), &mut errors);
        let currency = currency_field(self.currency.as_deref(), &mut errors);

        match (wallet_id, direction, amount, currency) {
            (Some(wallet_id), Some(direction), Some(amount), Some(currency)) => {
                errors.into_result(BalanceChange {
                    wallet_id,
                    direction,
                    amount,
                    currency,
                })
            }
            _ => Err(errors),
        }
    }
}

impl RawNewWallet {
    /// Validates the requested currency.
    ///
    /// # Errors
    ///
    /// Returns a `currency` field error.
    pub fn validate(&self) -> Result<Currency, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        currency_field(self.currency.as_deref(), &mut errors).ok_or(errors)
    }
}

impl RawBalanceQuery {
    /// Validates the wallet id.
    ///
    /// # Errors
    ///
    /// Returns a `wallet_id` field error.
    pub fn validate(&self) -> Result<WalletId, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        wallet_id_field(self.wallet_id.as_deref(), &mut errors).ok_or(errors)
    }
}

/// Returns the trimmed value, or records a "required" error.
fn required<'a>(
    value: Option<&'a str>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.add(field, format!("The {label} field is required."));
            None
        }
    }
}

fn wallet_id_field(value: Option<&str>, errors: &mut ValidationErrors) -> Option<WalletId> {
    let raw = required(value, "wallet_id", "wallet id", errors)?;
    match WalletId::from_str(raw) {
        Ok(id) if id.into_inner() > 0 => Some(id),
        _ => {
            errors.add("wallet_id", "The wallet id must be a positive integer.");
            None
        }
    }
}

fn direction_field(value: Option<&str>, errors: &mut ValidationErrors) -> Option<Direction> {
    let raw = required(value, "transaction_type", "transaction type", errors)?;
    Direction::from_str(raw)
        .map_err(|_| errors.add("transaction_type", "The selected transaction type is invalid."))
        .ok()
}

fn amount_field(value: Option<&str>, errors: &mut ValidationErrors) -> Option<Decimal> {
    let raw = required(value, "amount", "amount", errors)?;
    let Some(amount) = parse_decimal(raw) else {
        errors.add("amount", "The amount must be a number.");
        return None;
    };
    if amount <= Decimal::ZERO {
        errors.add("amount", "The amount must be greater than 0.");
        return None;
    }
    if amount > decimal::MAX_VALUE {
        errors.add(
            "amount",
            format!("The amount must not be greater than {}.", decimal::MAX_VALUE),
        );
        return None;
    }
    Some(amount)
}

fn currency_field(value: Option<&str>, errors: &mut ValidationErrors) -> Option<Currency> {
    let raw = required(value, "currency", "currency", errors)?;
    Currency::from_str(raw)
        .map_err(|_| errors.add("currency", "The selected currency is invalid."))
        .ok()
}

/// Parses plain (`"10.5"`) or scientific (`"1e3"`) notation.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
