//! Currency-aware decimal arithmetic.
//!
//! Every operation resolves the *reference precision* once (the minor-unit
//! digits of the primary operand's currency) and normalizes its result to
//! that scale. Operands are never modified; each call returns a new `Money`.

pub mod allocation;
mod decimal;
mod rounding;

#[cfg(test)]
mod allocation_props;
#[cfg(test)]
mod decimal_props;

pub use allocation::AllocationUtil;
pub use decimal::DecimalCalculator;

use pecunia_shared::{Money, MoneyResult};

use crate::comparator::Comparator;
use crate::scalar::IntoDecimal;

/// Arithmetic capability of a money backend.
pub trait Calculator {
    /// Comparator used for currency and sign checks.
    type Comparator: Comparator;

    /// Returns the comparator of this backend.
    fn comparator(&self) -> &Self::Comparator;

    /// `first + addends[0] + ...`, left to right.
    ///
    /// Fails with `CurrencyMismatch` if any addend's currency differs.
    fn add(&self, first: &Money, addends: &[Money]) -> MoneyResult<Money>;

    /// `first - subtrahends[0] - ...`, left to right.
    ///
    /// Fails with `CurrencyMismatch` if any subtrahend's currency differs.
    fn subtract(&self, first: &Money, subtrahends: &[Money]) -> MoneyResult<Money>;

    /// Product truncated to the reference precision.
    fn multiply(&self, money: &Money, multiplier: impl IntoDecimal) -> MoneyResult<Money>;

    /// Quotient truncated toward zero at the reference precision.
    ///
    /// Fails with `DivisionByZero` before dividing if `divisor` is zero.
    fn divide(&self, money: &Money, divisor: impl IntoDecimal) -> MoneyResult<Money>;

    /// Remainder of `money / divisor`, carrying the dividend's sign.
    ///
    /// Fails with `ModuloByZero` if the divisor amount is zero and with
    /// `CurrencyMismatch` if the currencies differ.
    fn modulo(&self, money: &Money, divisor: &Money) -> MoneyResult<Money>;

    /// `floor(money * ratio / total)` at the minor unit.
    fn share(
        &self,
        money: &Money,
        ratio: impl IntoDecimal,
        total: impl IntoDecimal,
    ) -> MoneyResult<Money>;

    /// Adds `-1` to a negative value and `0` otherwise, so the result goes
    /// through the same normalization as [`Self::add`].
    fn floor(&self, money: &Money) -> MoneyResult<Money>;

    /// Splits `money` proportionally to `ratios`, conserving the total.
    ///
    /// Amounts with digits finer than the currency precision are split at
    /// their own scale so nothing is dropped.
    ///
    /// `result[i]` corresponds to `ratios[i]`.
    fn allocate<I>(&self, money: &Money, ratios: I) -> MoneyResult<Vec<Money>>
    where
        I: IntoIterator,
        I::Item: IntoDecimal;

    /// Splits `money` into `n` equal shares, conserving the total.
    fn allocate_to(&self, money: &Money, n: usize) -> MoneyResult<Vec<Money>>;

    /// Amount without its sign.
    fn absolute(&self, money: &Money) -> Money;

    /// `zero - money`.
    fn negative(&self, money: &Money) -> MoneyResult<Money>;

    /// Smallest value; the earliest wins ties. Values whose currency differs
    /// from the running candidate are never selected.
    fn min(&self, first: &Money, others: &[Money]) -> Money;

    /// Largest value; the earliest wins ties. Values whose currency differs
    /// from the running candidate are never selected.
    fn max(&self, first: &Money, others: &[Money]) -> Money;

    /// Same as [`Self::add`].
    fn sum(&self, first: &Money, others: &[Money]) -> MoneyResult<Money> {
        self.add(first, others)
    }

    /// Sum divided by the number of values (including `first`).
    fn average(&self, first: &Money, others: &[Money]) -> MoneyResult<Money> {
        let total = self.sum(first, others)?;
        self.divide(&total, others.len() + 1)
    }
}
