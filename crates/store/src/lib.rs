//! In-memory data layer for Ratebook.
//!
//! This crate provides:
//! - The `CurrencyRecord` type
//! - The `CurrencyStore` repository holding all records

pub mod record;
pub mod repository;

pub use record::CurrencyRecord;
pub use repository::{CreateCurrencyInput, CurrencyStore, StoreError};
