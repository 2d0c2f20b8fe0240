//! HTTP API layer with Axum routes for the wallet ledger.
//!
//! This crate provides:
//! - The wallet routes (create, balance read, balance change)
//! - JSON error rendering for [`wallet_shared::AppError`]
//! - The shared [`AppState`]

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use wallet_core::currency::{FixedRates, RateSource};
use wallet_db::WalletRepository;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Exchange rates used for cross-currency balance changes.
    pub rates: Arc<dyn RateSource>,
}

impl AppState {
    /// Creates state backed by `db` with the built-in fixed rates.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Arc::new(db),
            rates: Arc::new(FixedRates),
        }
    }

    /// A wallet repository sharing this state's pool and rates.
    #[must_use]
    pub fn wallets(&self) -> WalletRepository {
        WalletRepository::with_rates((*self.db).clone(), Arc::clone(&self.rates))
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
