//! `SeaORM` Entity for wallets table.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use wallet_shared::types::{Currency, WalletId, decimal};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub currency: String,
    #[sea_orm(column_type = "Decimal(Some((24, 4)))")]
    pub balance: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Typed id of this wallet.
    #[must_use]
    pub const fn wallet_id(&self) -> WalletId {
        WalletId(self.id)
    }

    /// Parses the stored currency code.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::Type` if the row holds a code the application does not know.
    pub fn currency(&self) -> Result<Currency, DbErr> {
        Currency::from_str(&self.currency).map_err(DbErr::Type)
    }

    /// Balance normalized to exactly 4 fractional digits.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        decimal::normalize(self.balance)
    }
}
