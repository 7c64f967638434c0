//! Currency metadata record.

use serde::{Deserialize, Serialize};

/// Metadata describing one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Alphabetic code (ISO 4217 for real currencies), e.g. "EUR".
    pub alphabetic_code: String,
    /// Human readable currency name.
    #[serde(alias = "currency")]
    pub name: String,
    /// Number of decimal digits of the minor unit (2 for cents).
    pub minor_unit: u32,
    /// ISO 4217 numeric code, if any.
    #[serde(default)]
    pub numeric_code: Option<u16>,
}

impl CurrencyDefinition {
    /// Creates a new currency definition.
    #[must_use]
    pub fn new(
        alphabetic_code: impl Into<String>,
        name: impl Into<String>,
        minor_unit: u32,
        numeric_code: Option<u16>,
    ) -> Self {
        Self {
            alphabetic_code: alphabetic_code.into(),
            name: name.into(),
            minor_unit,
            numeric_code,
        }
    }
}
