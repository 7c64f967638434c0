//! Exact decimal comparator.

use std::cmp::Ordering;

use pecunia_shared::Money;
use rust_decimal::Decimal;

use super::Comparator;

/// Comparator over exact `Decimal` amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalComparator;

impl DecimalComparator {
    /// Creates a new comparator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn compare(first: &Money, challenge: &Money) -> Option<Ordering> {
        first
            .has_currency_of(challenge)
            .then(|| first.amount().cmp(&challenge.amount()))
    }
}

impl Comparator for DecimalComparator {
    fn is_same_currency(&self, first: &Money, others: &[Money]) -> bool {
        others.iter().all(|m| m.has_currency_of(first))
    }

    fn is_zero(&self, money: &Money) -> bool {
        money.amount().is_zero()
    }

    fn is_negative(&self, money: &Money) -> bool {
        money.amount().cmp(&Decimal::ZERO) == Ordering::Less
    }

    fn equals(&self, first: &Money, challenge: &Money) -> bool {
        Self::compare(first, challenge) == Some(Ordering::Equal)
    }

    fn greater_than(&self, first: &Money, challenge: &Money) -> bool {
        Self::compare(first, challenge) == Some(Ordering::Greater)
    }

    fn less_than(&self, first: &Money, challenge: &Money) -> bool {
        Self::compare(first, challenge) == Some(Ordering::Less)
    }
}
