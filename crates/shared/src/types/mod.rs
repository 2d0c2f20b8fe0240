//! Common types used across the application.

pub mod currency;
pub mod decimal;
pub mod id;

pub use currency::Currency;
pub use decimal::DecimalError;
pub use id::*;
