//! Wallet repository: the store contract plus the locked balance transaction.
//!
//! Every balance change runs as one database transaction:
//! `BEGIN` → `SELECT … FOR UPDATE` → compute → `UPDATE` → `COMMIT`.
//! A second change on the same wallet blocks on the row lock until the first
//! commits or rolls back, then reads the committed balance. Changes on
//! different wallets never contend.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QuerySelect,
    Set, TransactionTrait,
};
use tracing::{debug, info, warn};
use wallet_core::currency::{FixedRates, RateSource};
use wallet_core::wallet::{BalanceChange, BalanceService, WalletError};
use wallet_shared::AppError;
use wallet_shared::types::{Currency, WalletId, decimal};

use crate::entities::wallets;

/// Error types for wallet repository operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletRepositoryError {
    /// A wallet rule rejected the operation.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl WalletRepositoryError {
    /// Returns the wallet rule violation, if that is what this is.
    #[must_use]
    pub const fn as_wallet_error(&self) -> Option<&WalletError> {
        match self {
            Self::Wallet(err) => Some(err),
            Self::Database(_) => None,
        }
    }
}

impl From<WalletRepositoryError> for AppError {
    fn from(err: WalletRepositoryError) -> Self {
        match err {
            WalletRepositoryError::Wallet(err) => err.into(),
            WalletRepositoryError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Wallet repository for creation, reads and balance changes.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
    rates: Arc<dyn RateSource>,
}

impl WalletRepository {
    /// Creates a new wallet repository using the built-in fixed rates.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_rates(db, Arc::new(FixedRates))
    }

    /// Creates a new wallet repository with a custom rate source.
    #[must_use]
    pub fn with_rates(db: DatabaseConnection, rates: Arc<dyn RateSource>) -> Self {
        Self { db, rates }
    }

    /// Creates a wallet with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, currency: Currency) -> Result<wallets::Model, WalletRepositoryError> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let wallet = wallets::ActiveModel {
            currency: Set(currency.code().to_string()),
            balance: Set(decimal::normalize(Decimal::ZERO)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(wallet_id = wallet.id, currency = %currency, "Wallet created");
        Ok(wallet)
    }

    /// Finds a wallet by ID, without locking.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: WalletId) -> Result<Option<wallets::Model>, WalletRepositoryError> {
        let wallet = wallets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?;
        Ok(wallet)
    }

    /// Returns the current balance of a wallet.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::NotFound`] if the wallet does not exist.
    pub async fn get_balance(&self, id: WalletId) -> Result<Decimal, WalletRepositoryError> {
        let wallet = self
            .find_by_id(id)
            .await?
            .ok_or(WalletError::NotFound(id))?;
        Ok(wallet.balance())
    }

    /// Applies a validated balance change atomically.
    ///
    /// Locks the wallet row, re-reads it, converts the amount into the
    /// wallet's currency, applies the debit or credit and persists the new
    /// balance, all inside one transaction. Any failure rolls the whole
    /// transaction back, so a rejected change leaves no trace.
    ///
    /// # Errors
    ///
    /// - [`WalletError::NotFound`] if the wallet does not exist
    /// - [`WalletError::InsufficientFunds`] if a credit exceeds the balance
    /// - [`WalletError::Conversion`] if the currency pair has no rate
    /// - Database errors
    pub async fn change_balance(
        &self,
        change: &BalanceChange,
    ) -> Result<wallets::Model, WalletRepositoryError> {
        let txn = self.db.begin().await?;

        match self.apply_locked(&txn, change).await {
            Ok(wallet) => {
                txn.commit().await?;
                info!(
                    wallet_id = wallet.id,
                    direction = %change.direction,
                    amount = %change.amount,
                    currency = %change.currency,
                    balance = %wallet.balance,
                    "Balance changed"
                );
                Ok(wallet)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                if let WalletRepositoryError::Wallet(WalletError::InsufficientFunds { balance, requested }) = &err {
                    warn!(
                        wallet_id = %change.wallet_id,
                        balance = %balance,
                        requested = %requested,
                        "Credit rejected: insufficient funds"
                    );
                }
                Err(err)
            }
        }
    }

    /// Lock, re-read, compute and write; the caller commits or rolls back.
    async fn apply_locked(
        &self,
        txn: &DatabaseTransaction,
        change: &BalanceChange,
    ) -> Result<wallets::Model, WalletRepositoryError> {
        let wallet = Self::lock_for_update(txn, change.wallet_id)
            .await?
            .ok_or(WalletError::NotFound(change.wallet_id))?;
        debug!(wallet_id = wallet.id, balance = %wallet.balance, "Wallet row locked");

        let currency = wallet.currency()?;
        let new_balance = BalanceService::apply(wallet.balance, currency, change, self.rates.as_ref())?;

        Ok(Self::save(txn, wallet, new_balance).await?)
    }

    /// Takes an exclusive row lock on the wallet and returns the locked row.
    ///
    /// The lock is held until `txn` ends. Returns `None` if no such wallet exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn lock_for_update(
        txn: &DatabaseTransaction,
        id: WalletId,
    ) -> Result<Option<wallets::Model>, DbErr> {
        wallets::Entity::find_by_id(id.into_inner())
            .lock_exclusive()
            .one(txn)
            .await
    }

    /// Persists a new balance for `wallet` inside `txn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn save(
        txn: &DatabaseTransaction,
        wallet: wallets::Model,
        balance: Decimal,
    ) -> Result<wallets::Model, DbErr> {
        let mut active: wallets::ActiveModel = wallet.into();
        active.balance = Set(balance);
        active.updated_at = Set(Utc::now().into());
        active.update(txn).await
    }
}
