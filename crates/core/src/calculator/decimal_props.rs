//! Property-based tests for the decimal calculator.
//!
//! - Addition and subtraction are inverse at the reference precision
//! - Division truncates toward zero, never past the exact quotient
//! - Results always carry the currency's scale

use pecunia_shared::{CurrencyCode, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Calculator, DecimalCalculator};
use crate::currency::StaticPrecisions;

fn calculator() -> DecimalCalculator<StaticPrecisions> {
    DecimalCalculator::new(StaticPrecisions::new([("EUR", 2), ("JPY", 0), ("BHD", 3)]))
}

/// Strategy to generate money already at its currency's precision.
fn normalized_money() -> impl Strategy<Value = Money> {
    (
        -100_000_000i64..100_000_000i64,
        prop::sample::select(vec![("EUR", 2u32), ("JPY", 0), ("BHD", 3)]),
    )
        .prop_map(|(units, (code, scale))| {
            Money::new(Decimal::new(units, scale), CurrencyCode::new(code).unwrap())
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// (a + b) - b == a for normalized operands.
    #[test]
    fn prop_add_subtract_round_trip(a in normalized_money(), units in -100_000_000i64..100_000_000i64) {
        let calc = calculator();
        let b = a.with_amount(Decimal::new(units, a.amount().scale()));
        let sum = calc.add(&a, std::slice::from_ref(&b)).unwrap();
        let back = calc.subtract(&sum, std::slice::from_ref(&b)).unwrap();
        prop_assert_eq!(back, a);
    }

    /// |q| <= |exact| and the gap is below one minor unit.
    #[test]
    fn prop_divide_truncates(a in normalized_money(), divisor in 1i64..1_000) {
        let calc = calculator();
        let quotient = calc.divide(&a, divisor).unwrap();
        let exact = a.amount() / Decimal::from(divisor);
        let unit = Decimal::new(1, a.amount().scale());
        prop_assert!(quotient.amount().abs() <= exact.abs());
        prop_assert!((exact - quotient.amount()).abs() < unit);
        prop_assert_eq!(quotient.amount().scale(), a.amount().scale());
    }

    /// negative(negative(a)) == a.
    #[test]
    fn prop_double_negation(a in normalized_money()) {
        let calc = calculator();
        let twice = calc.negative(&calc.negative(&a).unwrap()).unwrap();
        prop_assert_eq!(twice, a);
    }

    /// min <= every value <= max for a single currency.
    #[test]
    fn prop_min_max_bound(values in prop::collection::vec(-1_000_000i64..1_000_000i64, 1..10)) {
        let calc = calculator();
        let eur = CurrencyCode::new("EUR").unwrap();
        let money: Vec<Money> = values
            .iter()
            .map(|v| Money::new(Decimal::new(*v, 2), eur.clone()))
            .collect();
        let (first, rest) = money.split_first().unwrap();
        let min = calc.min(first, rest);
        let max = calc.max(first, rest);
        for m in &money {
            prop_assert!(min.amount() <= m.amount());
            prop_assert!(max.amount() >= m.amount());
        }
    }
}
