//! Property-based tests for allocation.
//!
//! - Shares always add back up to the amount
//! - One share per ratio, each a whole number of minor units
//! - Zero weights get nothing, equal splits differ by at most one unit
//! - Conservation holds up to the largest supported precision

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::AllocationUtil;

/// Strategy to generate amounts (-1,000,000.0000 to 1,000,000.0000).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate non-negative weights with at least one positive.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1_000, 1..12)
        .prop_filter("at least one positive ratio", |v| v.iter().any(|r| *r > 0))
        .prop_map(|v| v.into_iter().map(Decimal::from).collect())
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The shares sum to the amount, including digits finer than the precision.
    #[test]
    fn prop_allocation_conserves_total(
        amount in any_amount(),
        ratios in ratios(),
        places in decimal_places(),
    ) {
        let shares = AllocationUtil::allocate_by_ratios(amount, &ratios, places).unwrap();
        prop_assert_eq!(shares.iter().sum::<Decimal>(), amount);
    }

    /// One share per ratio, each a whole number of minor units.
    #[test]
    fn prop_allocation_shape(
        amount in any_amount(),
        ratios in ratios(),
        places in decimal_places(),
    ) {
        let shares = AllocationUtil::allocate_by_ratios(amount, &ratios, places).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        let unit = Decimal::new(1, places.max(amount.normalize().scale()));
        for share in &shares {
            prop_assert!((share % unit).is_zero());
        }
    }

    /// Zero-weight recipients receive nothing.
    #[test]
    fn prop_zero_ratio_gets_zero(
        amount in any_amount(),
        ratios in ratios(),
        places in decimal_places(),
    ) {
        let shares = AllocationUtil::allocate_by_ratios(amount, &ratios, places).unwrap();
        for (share, ratio) in shares.iter().zip(&ratios) {
            if ratio.is_zero() {
                prop_assert!(share.is_zero());
            }
        }
    }

    /// High precisions conserve the total and never report overflow.
    #[test]
    fn prop_allocation_at_high_precision(
        units in 1i64..1_000i64,
        ratios in ratios(),
        places in 20u32..=25,
    ) {
        let amount = Decimal::from(units);
        let shares = AllocationUtil::allocate_by_ratios(amount, &ratios, places).unwrap();
        prop_assert_eq!(shares.iter().sum::<Decimal>(), amount);
    }

    /// Equal splits differ by at most one minor unit, larger shares first.
    #[test]
    fn prop_equal_split_is_fair(
        cents in 0i64..100_000_000i64,
        count in 1usize..50,
    ) {
        let total = Decimal::new(cents, 2);
        let shares = AllocationUtil::allocate_equal(total, count, 2).unwrap();
        prop_assert_eq!(shares.iter().sum::<Decimal>(), total);
        for pair in shares.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
            prop_assert!(pair[0] - pair[1] <= Decimal::new(1, 2));
        }
    }
}
