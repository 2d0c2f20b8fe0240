//! Core wallet logic.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Everything that decides what a balance becomes lives here; the database
//! crate only supplies the lock and the persistence around it.
//!
//! # Modules
//!
//! - `currency` - Exchange rates and currency conversion
//! - `wallet` - Request validation, balance mutation rules, domain errors

pub mod currency;
pub mod wallet;
