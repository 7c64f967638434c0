//! Ordering and sign predicates over money values.
//!
//! Predicates never fail: comparing values of different currencies simply
//! answers `false`. Callers that need a hard failure check
//! [`Comparator::is_same_currency`] first.

mod decimal;

#[cfg(test)]
mod props;

pub use decimal::DecimalComparator;

use pecunia_shared::Money;

/// Comparison capability of a money backend.
pub trait Comparator {
    /// True iff every value in `others` has the currency of `first`.
    fn is_same_currency(&self, first: &Money, others: &[Money]) -> bool;

    /// True iff the amount is exactly zero.
    fn is_zero(&self, money: &Money) -> bool;

    /// True iff the amount is strictly below zero.
    fn is_negative(&self, money: &Money) -> bool;

    /// Negation of [`Self::is_negative`]: zero counts as positive.
    fn is_positive(&self, money: &Money) -> bool {
        !self.is_negative(money)
    }

    /// Same currency and equal amounts.
    fn equals(&self, first: &Money, challenge: &Money) -> bool;

    /// Same currency and `first > challenge`.
    fn greater_than(&self, first: &Money, challenge: &Money) -> bool;

    /// `greater_than || equals`.
    fn greater_than_or_equal(&self, first: &Money, challenge: &Money) -> bool {
        self.greater_than(first, challenge) || self.equals(first, challenge)
    }

    /// Same currency and `first < challenge`.
    fn less_than(&self, first: &Money, challenge: &Money) -> bool;

    /// `less_than || equals`.
    fn less_than_or_equal(&self, first: &Money, challenge: &Money) -> bool {
        self.less_than(first, challenge) || self.equals(first, challenge)
    }
}
