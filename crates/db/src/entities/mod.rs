//! `SeaORM` entity definitions.

pub mod wallets;
