//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction and arithmetic.
///
/// Every variant aborts the operation that detected it; no partial result is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two amounts with different currencies were combined.
    #[error("Currency does not match: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the reference operand.
        expected: String,
        /// Currency of the offending operand.
        found: String,
    },

    /// A divisor was exactly zero.
    #[error("Division by 0")]
    DivisionByZero,

    /// Allocation ratios or share count are unusable.
    #[error("Cannot allocate: {0}")]
    InvalidAllocation(String),

    /// Modulo divisor was exactly zero.
    #[error("Modulo cannot be zero")]
    ModuloByZero,

    /// The currency code is not in the registry.
    #[error("The currency code \"{code}\" is not valid. Possible values are: \"{}\"", .allowed.join("\", \""))]
    InvalidCurrencyCode {
        /// The submitted code.
        code: String,
        /// Codes known to the registry.
        allowed: Vec<String>,
    },

    /// Input could not be read as a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The result does not fit in the decimal representation.
    #[error("Arithmetic overflow during {0}")]
    Overflow(&'static str),

    /// Currency metadata could not be loaded or is inconsistent.
    #[error("Currency registry error: {0}")]
    Registry(String),
}

impl MoneyError {
    /// Create a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid currency code error.
    #[must_use]
    pub fn invalid_currency_code(code: impl Into<String>, allowed: Vec<String>) -> Self {
        Self::InvalidCurrencyCode {
            code: code.into(),
            allowed,
        }
    }

    /// Create an invalid allocation error.
    #[must_use]
    pub fn invalid_allocation(msg: impl Into<String>) -> Self {
        Self::InvalidAllocation(msg.into())
    }

    /// Create a registry error.
    #[must_use]
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Returns the stable error code for diagnostics and CLI output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidAllocation(_) => "INVALID_ALLOCATION",
            Self::ModuloByZero => "MODULO_BY_ZERO",
            Self::InvalidCurrencyCode { .. } => "INVALID_CURRENCY_CODE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::Overflow(_) => "OVERFLOW",
            Self::Registry(_) => "REGISTRY_ERROR",
        }
    }

    /// Returns true for the invalid-argument family (allocation and modulo).
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidAllocation(_) | Self::ModuloByZero)
    }
}
