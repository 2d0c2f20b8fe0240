//! Wallet routes: creation, balance reads and balance changes.
//!
//! Bodies are read as loose JSON so that a malformed field (a string where a
//! number belongs, a negative amount, an unknown currency) surfaces as a
//! field-level validation error instead of an extractor rejection. Nothing
//! reaches the database until every field has passed.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use wallet_core::wallet::{RawBalanceChange, RawBalanceQuery, RawNewWallet};
use wallet_db::entities::wallets;
use wallet_shared::ValidationErrors;

use crate::{ApiError, AppState};

/// Creates the wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets/create_wallet", post(create_wallet))
        .route("/wallets/get_balance", get(get_balance))
        .route("/wallets/change_balance", post(change_balance))
}

/// A wallet as returned to clients.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    /// Wallet id.
    pub id: i64,
    /// ISO currency code.
    pub currency: String,
    /// Balance with exactly four fractional digits.
    pub balance: String,
}

impl From<wallets::Model> for WalletResponse {
    fn from(wallet: wallets::Model) -> Self {
        Self {
            id: wallet.id,
            balance: wallet.balance().to_string(),
            currency: wallet.currency,
        }
    }
}

/// Balance read response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Balance with exactly four fractional digits.
    pub balance: String,
}

/// Query string of `GET /wallets/get_balance`.
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// Wallet id, validated by the handler.
    pub wallet_id: Option<String>,
}

/// POST `/wallets/create_wallet` - Create a wallet with a zero balance.
async fn create_wallet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WalletResponse>, ApiError> {
    let body = parse_body(&body)?;
    let currency = RawNewWallet {
        currency: field(&body, "currency"),
    }
    .validate()?;

    let wallet = state.wallets().create(currency).await?;
    Ok(Json(wallet.into()))
}

/// GET `/wallets/get_balance` - Read a wallet's balance.
async fn get_balance(
    State(state): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let wallet_id = RawBalanceQuery {
        wallet_id: query.wallet_id,
    }
    .validate()?;

    let balance = state.wallets().get_balance(wallet_id).await?;
    Ok(Json(BalanceResponse {
        balance: balance.to_string(),
    }))
}

/// POST `/wallets/change_balance` - Apply a debit or credit.
async fn change_balance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WalletResponse>, ApiError> {
    let body = parse_body(&body)?;
    let change = RawBalanceChange {
        wallet_id: field(&body, "wallet_id"),
        transaction_type: field(&body, "transaction_type"),
        amount: field(&body, "amount"),
        currency: field(&body, "currency"),
    }
    .validate()?;
    debug!(wallet_id = %change.wallet_id, direction = %change.direction, "Balance change accepted");

    let wallet = state.wallets().change_balance(&change).await?;
    Ok(Json(wallet.into()))
}

/// Parses a request body as JSON. An empty body counts as `{}`.
fn parse_body(bytes: &[u8]) -> Result<Value, ValidationErrors> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|_| ValidationErrors::single("body", "The request body must be valid JSON."))
}

/// Reads `name` from a JSON object as text.
///
/// Strings pass through; numbers keep the exact digits they were sent with
/// (`serde_json` is built with `arbitrary_precision`); `null` and absent
/// keys are missing. Anything else is kept as its JSON text so validation
/// rejects it.
fn field(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
