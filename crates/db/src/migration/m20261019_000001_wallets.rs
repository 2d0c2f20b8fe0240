//! Wallets migration.
//!
//! Creates the single `wallets` table. The CHECK constraints mirror the
//! application rules; the balance transaction enforces them itself and never
//! relies on the database to reject a negative balance.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(WALLETS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS wallets CASCADE;")
            .await?;
        Ok(())
    }
}

const WALLETS_SQL: &str = r"
-- Wallets: one balance in one fixed currency.
-- NUMERIC(24, 4) holds up to 99999999999999999999.9999, the ledger ceiling.
CREATE TABLE wallets (
    id BIGSERIAL PRIMARY KEY,
    currency VARCHAR(3) NOT NULL,
    balance NUMERIC(24, 4) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_wallets_currency CHECK (currency IN ('RUB', 'USD')),
    CONSTRAINT chk_wallets_balance_non_negative CHECK (balance >= 0)
);
";
