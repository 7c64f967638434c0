//! Construction of `Money` from raw input.

use pecunia_shared::{CurrencyCode, Money, MoneyError, MoneyResult};

use crate::currency::PrecisionResolver;
use crate::scalar::IntoDecimal;

/// Builds `Money` values, validating the currency against a resolver.
///
/// This is the entry point for amounts coming from outside (user input,
/// files). The amount is kept exactly as given; arithmetic normalizes it.
#[derive(Debug, Clone)]
pub struct MoneyFactory<R> {
    resolver: R,
    default_currency: Option<CurrencyCode>,
}

impl<R: PrecisionResolver> MoneyFactory<R> {
    /// Creates a factory without a default currency.
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self {
            resolver,
            default_currency: None,
        }
    }

    /// Sets the currency used by [`Self::create_default`].
    pub fn with_default_currency(mut self, code: &str) -> MoneyResult<Self> {
        self.default_currency = Some(self.validate(code)?);
        Ok(self)
    }

    /// Returns the default currency, if any.
    #[must_use]
    pub const fn default_currency(&self) -> Option<&CurrencyCode> {
        self.default_currency.as_ref()
    }

    /// Creates a money value in `code`.
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyCode` if the resolver does not know `code`,
    /// `InvalidAmount` if `amount` is not a decimal number.
    pub fn create(&self, amount: impl IntoDecimal, code: &str) -> MoneyResult<Money> {
        let currency = self.validate(code)?;
        Ok(Money::new(amount.into_decimal()?, currency))
    }

    /// Creates a money value in the default currency.
    pub fn create_default(&self, amount: impl IntoDecimal) -> MoneyResult<Money> {
        let currency = self
            .default_currency
            .clone()
            .ok_or_else(|| MoneyError::invalid_currency_code("", self.resolver.allowed_codes()))?;
        Ok(Money::new(amount.into_decimal()?, currency))
    }

    /// Creates a zero amount in `code`.
    pub fn zero(&self, code: &str) -> MoneyResult<Money> {
        Ok(Money::zero(self.validate(code)?))
    }

    /// Returns the resolver backing this factory.
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    fn validate(&self, code: &str) -> MoneyResult<CurrencyCode> {
        if !self.resolver.is_valid_code(code) {
            return Err(MoneyError::invalid_currency_code(
                code,
                self.resolver.allowed_codes(),
            ));
        }
        CurrencyCode::new(code)
    }
}
