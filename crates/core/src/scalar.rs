//! Conversion of raw numeric input into exact decimals.
//!
//! Scalars (multipliers, divisors, ratios) and factory amounts may arrive as
//! integers, as `Decimal`s or as decimal text. Binary floats are not accepted.

use pecunia_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// A value that can be read as an exact decimal.
pub trait IntoDecimal {
    /// Converts `self` into a `Decimal`.
    fn into_decimal(self) -> MoneyResult<Decimal>;
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        Ok(*self)
    }
}

macro_rules! integer_into_decimal {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

integer_into_decimal!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl IntoDecimal for i128 {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        Decimal::try_from_i128_with_scale(self, 0)
            .map_err(|_| MoneyError::InvalidAmount(self.to_string()))
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(self)
    }
}

/// Parses decimal text such as `"14"`, `"-0.5"`, `"1."` or `"1e3"`.
fn parse_decimal(input: &str) -> MoneyResult<Decimal> {
    let trimmed = input.trim();
    let normalized = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if normalized.is_empty() {
        return Err(MoneyError::InvalidAmount(input.to_string()));
    }

    Decimal::from_str_exact(normalized)
        .or_else(|_| Decimal::from_scientific(normalized))
        .map_err(|_| MoneyError::InvalidAmount(input.to_string()))
}
