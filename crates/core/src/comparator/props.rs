//! Property-based tests for the comparator.
//!
//! - Currency equality is an equivalence relation
//! - Ordering predicates agree with each other

use pecunia_shared::{CurrencyCode, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Comparator, DecimalComparator};

/// Strategy to generate money in one of a few currencies.
fn any_money() -> impl Strategy<Value = Money> {
    (
        -1_000_000i64..1_000_000i64,
        0u32..=4,
        prop::sample::select(vec!["EUR", "CHF", "JPY"]),
    )
        .prop_map(|(units, scale, code)| {
            Money::new(Decimal::new(units, scale), CurrencyCode::new(code).unwrap())
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every value has its own currency.
    #[test]
    fn prop_same_currency_reflexive(a in any_money()) {
        prop_assert!(DecimalComparator.is_same_currency(&a, std::slice::from_ref(&a)));
    }

    /// Swapping the operands does not change the answer.
    #[test]
    fn prop_same_currency_symmetric(a in any_money(), b in any_money()) {
        let cmp = DecimalComparator;
        prop_assert_eq!(
            cmp.is_same_currency(&a, std::slice::from_ref(&b)),
            cmp.is_same_currency(&b, std::slice::from_ref(&a))
        );
    }

    /// a~b and b~c imply a~c, and the set form agrees with pairwise checks.
    #[test]
    fn prop_same_currency_transitive(
        a in any_money(),
        b in any_money(),
        c in any_money(),
    ) {
        let cmp = DecimalComparator;
        if cmp.is_same_currency(&a, std::slice::from_ref(&b))
            && cmp.is_same_currency(&b, std::slice::from_ref(&c))
        {
            prop_assert!(cmp.is_same_currency(&a, std::slice::from_ref(&c)));
        }
        prop_assert_eq!(
            cmp.is_same_currency(&a, &[b.clone(), c.clone()]),
            cmp.is_same_currency(&a, std::slice::from_ref(&b))
                && cmp.is_same_currency(&a, std::slice::from_ref(&c))
        );
    }

    /// Exactly one of <, =, > holds for same-currency values; none otherwise.
    #[test]
    fn prop_trichotomy(a in any_money(), b in any_money()) {
        let cmp = DecimalComparator;
        let relations = [cmp.less_than(&a, &b), cmp.equals(&a, &b), cmp.greater_than(&a, &b)];
        let holding = relations.iter().filter(|r| **r).count();
        if a.has_currency_of(&b) {
            prop_assert_eq!(holding, 1);
        } else {
            prop_assert_eq!(holding, 0);
        }
    }
}
