//! Display formatting of money values.
//!
//! Formatting only reads a finished `Money`; nothing here feeds back into
//! arithmetic. Amounts are shown at their currency's precision using
//! banker's rounding.

pub mod locale;

pub use locale::{LocaleConventions, SymbolPosition};

use pecunia_shared::config::FormattingConfig;
use pecunia_shared::{Money, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::PrecisionResolver;

/// Symbol per currency code when the locale has no override.
const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "US$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("ILS", "₪"),
    ("VND", "₫"),
    ("NGN", "₦"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("MXN", "MX$"),
    ("HKD", "HK$"),
    ("TWD", "NT$"),
    ("XAF", "FCFA"),
    ("XOF", "F\u{202f}CFA"),
];

/// Region-specific symbols: a region's own dollar is just `$`.
const REGIONAL_SYMBOLS: &[(&str, &str, &str)] = &[
    ("US", "USD", "$"),
    ("CA", "CAD", "$"),
    ("AU", "AUD", "$"),
    ("NZ", "NZD", "$"),
    ("MX", "MXN", "$"),
    ("HK", "HKD", "HK$"),
    ("JP", "JPY", "￥"),
    ("CN", "CNY", "¥"),
];

/// Locale-aware formatter.
#[derive(Debug, Clone)]
pub struct Formatter<R> {
    resolver: R,
    default_locale: String,
}

impl<R: PrecisionResolver> Formatter<R> {
    /// Creates a formatter falling back to `default_locale`.
    pub fn new(resolver: R, default_locale: impl Into<String>) -> Self {
        Self {
            resolver,
            default_locale: default_locale.into(),
        }
    }

    /// Creates a formatter from the `formatting` configuration section.
    pub fn from_config(resolver: R, config: &FormattingConfig) -> Self {
        Self::new(resolver, config.default_locale.clone())
    }

    /// Returns the default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Formats the numeric part of `money`, e.g. `1,234.50` (en_US) or
    /// `1.234,50` (de_DE).
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyCode` if the currency is unknown to the resolver.
    pub fn format_amount(&self, money: &Money, locale: Option<&str>) -> MoneyResult<String> {
        let conventions = locale::conventions(self.locale_or_default(locale));
        let precision = self.resolver.precision_of(money.currency().as_str())?;
        Ok(render_number(money.amount(), precision, &conventions))
    }

    /// Formats `money` with its currency symbol, e.g. `$1,234.50` (en_US) or
    /// `1.234,50 €` (de_DE).
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyCode` if the currency is unknown to the resolver.
    pub fn format_price(&self, money: &Money, locale: Option<&str>) -> MoneyResult<String> {
        let locale = self.locale_or_default(locale);
        let conventions = locale::conventions(locale);
        let precision = self.resolver.precision_of(money.currency().as_str())?;
        let symbol = self.currency_symbol(money.currency().as_str(), Some(locale));

        let number = render_number(money.amount().abs(), precision, &conventions);
        let sign = if is_displayed_negative(money.amount(), precision) {
            "-"
        } else {
            ""
        };

        Ok(match conventions.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPosition::Suffix => format!("{sign}{number}\u{a0}{symbol}"),
        })
    }

    /// Returns the symbol of `code` in `locale`, or `code` itself when no
    /// symbol is known.
    pub fn currency_symbol(&self, code: &str, locale: Option<&str>) -> String {
        let locale = locale::normalize(self.locale_or_default(locale));
        let (_, region) = locale::split(&locale);

        region
            .and_then(|region| {
                REGIONAL_SYMBOLS
                    .iter()
                    .find(|(r, c, _)| *r == region && *c == code)
                    .map(|(_, _, s)| *s)
            })
            .or_else(|| SYMBOLS.iter().find(|(c, _)| *c == code).map(|(_, s)| *s))
            .unwrap_or(code)
            .to_string()
    }

    fn locale_or_default<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        match locale {
            Some(l) if !l.trim().is_empty() => l,
            _ => &self.default_locale,
        }
    }
}

fn display_rounded(amount: Decimal, precision: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(precision);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

fn is_displayed_negative(amount: Decimal, precision: u32) -> bool {
    display_rounded(amount, precision).is_sign_negative()
}

fn render_number(amount: Decimal, precision: u32, conventions: &LocaleConventions) -> String {
    let rounded = display_rounded(amount, precision);
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(integer, conventions.group_separator));
    if !fraction.is_empty() {
        out.push_str(conventions.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
