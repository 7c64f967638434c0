//! Currency-aware decimal arithmetic for Pecunia.
//!
//! Amounts are exact decimals; every result is normalized to the minor unit
//! of its currency and operations never mix currencies silently.
//!
//! # Modules
//!
//! - `currency` - Currency registry, loaders and precision lookup
//! - `factory` - Validated construction of `Money` values
//! - `comparator` - Sign, zero, currency and ordering tests
//! - `calculator` - Arithmetic and largest-remainder allocation
//! - `formatter` - Locale-aware display strings
//! - `scalar` - Conversions of numeric operands into decimals

pub mod calculator;
pub mod comparator;
pub mod currency;
pub mod factory;
pub mod formatter;
pub mod scalar;

pub use calculator::{AllocationUtil, Calculator, DecimalCalculator};
pub use comparator::{Comparator, DecimalComparator};
pub use currency::{CurrencyRegistry, DynCurrencyRegistry, PrecisionResolver, StaticPrecisions};
pub use factory::MoneyFactory;
pub use formatter::Formatter;
pub use scalar::IntoDecimal;

pub use pecunia_shared::{CurrencyCode, Money, MoneyError, MoneyResult};
