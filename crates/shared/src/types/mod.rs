//! Common types used across the workspace.

pub mod money;

pub use money::{CurrencyCode, Money};
