//! Currency precision lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use pecunia_shared::{MoneyError, MoneyResult};

/// Maps a currency code to the number of digits of its minor unit.
///
/// Implementations must be deterministic and side-effect free from the
/// caller's point of view; any internal caching must be safe to read from
/// several threads.
pub trait PrecisionResolver: Send + Sync {
    /// Returns the minor-unit precision of `code`.
    ///
    /// Fails with [`MoneyError::InvalidCurrencyCode`] for unknown codes.
    fn precision_of(&self, code: &str) -> MoneyResult<u32>;

    /// Returns true if `code` is known.
    fn is_valid_code(&self, code: &str) -> bool;

    /// Returns all known codes, sorted.
    fn allowed_codes(&self) -> Vec<String>;
}

impl<R: PrecisionResolver + ?Sized> PrecisionResolver for &R {
    fn precision_of(&self, code: &str) -> MoneyResult<u32> {
        (**self).precision_of(code)
    }

    fn is_valid_code(&self, code: &str) -> bool {
        (**self).is_valid_code(code)
    }

    fn allowed_codes(&self) -> Vec<String> {
        (**self).allowed_codes()
    }
}

impl<R: PrecisionResolver + ?Sized> PrecisionResolver for Arc<R> {
    fn precision_of(&self, code: &str) -> MoneyResult<u32> {
        (**self).precision_of(code)
    }

    fn is_valid_code(&self, code: &str) -> bool {
        (**self).is_valid_code(code)
    }

    fn allowed_codes(&self) -> Vec<String> {
        (**self).allowed_codes()
    }
}

/// Fixed in-memory resolver built from `(code, precision)` pairs.
///
/// ```
/// use pecunia_core::currency::{PrecisionResolver, StaticPrecisions};
///
/// let resolver = StaticPrecisions::new([("EUR", 2), ("DUM", 0)]);
/// assert_eq!(resolver.precision_of("DUM").unwrap(), 0);
/// assert!(resolver.precision_of("USD").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticPrecisions {
    precisions: BTreeMap<String, u32>,
}

impl StaticPrecisions {
    /// Creates a resolver from `(code, precision)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            precisions: entries.into_iter().map(|(c, p)| (c.into(), p)).collect(),
        }
    }

    /// Returns a copy with one more currency.
    #[must_use]
    pub fn with(mut self, code: impl Into<String>, precision: u32) -> Self {
        self.precisions.insert(code.into(), precision);
        self
    }
}

impl PrecisionResolver for StaticPrecisions {
    fn precision_of(&self, code: &str) -> MoneyResult<u32> {
        self.precisions
            .get(code)
            .copied()
            .ok_or_else(|| MoneyError::invalid_currency_code(code, self.allowed_codes()))
    }

    fn is_valid_code(&self, code: &str) -> bool {
        self.precisions.contains_key(code)
    }

    fn allowed_codes(&self) -> Vec<String> {
        self.precisions.keys().cloned().collect()
    }
}
