//! Shared types and configuration for Ratebook.
//!
//! This crate provides common pieces used across all other crates:
//! - Typed IDs for type-safe record references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::CurrencyId;
