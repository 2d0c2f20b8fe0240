//! Shared types, errors, and configuration for the wallet ledger.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and exact 4-place decimal arithmetic
//! - Typed IDs for wallet references
//! - Field-level validation errors
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use error::AppError;
pub use validation::ValidationErrors;
