//! Shared types, errors, and configuration for Pecunia.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency code types with decimal precision
//! - The money error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyCode, Money};
