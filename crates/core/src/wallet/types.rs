//! Domain types for wallet operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wallet_shared::types::{Currency, WalletId};

/// Direction of a balance change, seen from the wallet owner's side.
///
/// NOTE: this is not the accounting convention. A `Debit` puts money INTO the
/// wallet and a `Credit` takes money OUT of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Increases the balance.
    Debit,
    /// Decreases the balance; may not take it below zero.
    Credit,
}

impl Direction {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// A validated request to move money into or out of a wallet.
///
/// Only produced by [`RawBalanceChange::validate`](super::RawBalanceChange::validate),
/// so `amount` is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChange {
    /// Target wallet.
    pub wallet_id: WalletId,
    /// Whether the balance goes up or down.
    pub direction: Direction,
    /// Amount in `currency`.
    pub amount: Decimal,
    /// Currency the amount is expressed in; converted if it differs from the wallet's.
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_direction_round_trip() {
        for direction in [Direction::Debit, Direction::Credit] {
            assert_eq!(Direction::from_str(direction.as_str()).unwrap(), direction);
        }
    }

    #[test]
    fn test_direction_rejects_unknown() {
        assert!(Direction::from_str("fake").is_err());
        assert!(Direction::from_str("Debit").is_err());
        assert!(Direction::from_str("").is_err());
    }
}
