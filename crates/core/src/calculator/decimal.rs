//! Exact decimal calculator backed by `rust_decimal`.

use pecunia_shared::{Money, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::warn;

use super::Calculator;
use super::allocation::AllocationUtil;
use super::rounding::truncate;
use crate::comparator::{Comparator, DecimalComparator};
use crate::currency::PrecisionResolver;
use crate::scalar::IntoDecimal;

/// Calculator over exact decimals.
///
/// ```
/// use pecunia_core::calculator::{Calculator, DecimalCalculator};
/// use pecunia_core::currency::StaticPrecisions;
/// use pecunia_core::factory::MoneyFactory;
///
/// let resolver = StaticPrecisions::new([("EUR", 2)]);
/// let factory = MoneyFactory::new(&resolver);
/// let calculator = DecimalCalculator::new(&resolver);
///
/// let a = factory.create(14, "EUR").unwrap();
/// let total = calculator.add(&a, &[a.clone(), a.clone()]).unwrap();
/// assert_eq!(total.to_string(), "42.00 EUR");
/// ```
#[derive(Debug, Clone)]
pub struct DecimalCalculator<R> {
    comparator: DecimalComparator,
    resolver: R,
}

impl<R: PrecisionResolver> DecimalCalculator<R> {
    /// Creates a calculator using `resolver` for currency precisions.
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self {
            comparator: DecimalComparator::new(),
            resolver,
        }
    }

    /// Returns the precision resolver.
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    fn reference_precision(&self, money: &Money) -> MoneyResult<u32> {
        self.resolver.precision_of(money.currency().as_str())
    }

    fn ensure_same_currency(
        &self,
        operation: &'static str,
        first: &Money,
        others: &[Money],
    ) -> MoneyResult<()> {
        if self.comparator.is_same_currency(first, others) {
            return Ok(());
        }

        let found = others
            .iter()
            .find(|m| !m.has_currency_of(first))
            .map_or_else(String::new, |m| m.currency().to_string());
        warn!(
            operation,
            expected = %first.currency(),
            found = %found,
            "Rejected operation on mismatched currencies"
        );
        Err(MoneyError::currency_mismatch(
            first.currency().as_str(),
            found,
        ))
    }

    fn accumulate(
        &self,
        operation: &'static str,
        first: &Money,
        operands: &[Money],
        step: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Money> {
        self.ensure_same_currency(operation, first, operands)?;
        let precision = self.reference_precision(first)?;

        let total = operands
            .iter()
            .try_fold(truncate(first.amount(), precision), |acc, m| {
                step(acc, m.amount()).map(|v| truncate(v, precision))
            })
            .ok_or(MoneyError::Overflow(operation))?;

        Ok(first.with_amount(total))
    }

    fn pick(&self, first: &Money, others: &[Money], better: impl Fn(&Money, &Money) -> bool) -> Money {
        others
            .iter()
            .fold(first, |candidate, m| if better(m, candidate) { m } else { candidate })
            .clone()
    }
}

impl<R: PrecisionResolver> Calculator for DecimalCalculator<R> {
    type Comparator = DecimalComparator;

    fn comparator(&self) -> &DecimalComparator {
        &self.comparator
    }

    fn add(&self, first: &Money, addends: &[Money]) -> MoneyResult<Money> {
        self.accumulate("add", first, addends, Decimal::checked_add)
    }

    fn subtract(&self, first: &Money, subtrahends: &[Money]) -> MoneyResult<Money> {
        self.accumulate("subtract", first, subtrahends, Decimal::checked_sub)
    }

    fn multiply(&self, money: &Money, multiplier: impl IntoDecimal) -> MoneyResult<Money> {
        let multiplier = multiplier.into_decimal()?;
        let precision = self.reference_precision(money)?;

        let product = money
            .amount()
            .checked_mul(multiplier)
            .ok_or(MoneyError::Overflow("multiply"))?;

        Ok(money.with_amount(truncate(product, precision)))
    }

    fn divide(&self, money: &Money, divisor: impl IntoDecimal) -> MoneyResult<Money> {
        let divisor = divisor.into_decimal()?;
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let precision = self.reference_precision(money)?;

        let quotient = money
            .amount()
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow("divide"))?;

        Ok(money.with_amount(truncate(quotient, precision)))
    }

    fn modulo(&self, money: &Money, divisor: &Money) -> MoneyResult<Money> {
        if self.comparator.is_zero(divisor) {
            return Err(MoneyError::ModuloByZero);
        }
        self.ensure_same_currency("modulo", money, std::slice::from_ref(divisor))?;
        let precision = self.reference_precision(money)?;

        let remainder = money
            .amount()
            .checked_rem(divisor.amount())
            .unwrap_or(Decimal::ZERO);

        Ok(money.with_amount(truncate(remainder, precision)))
    }

    fn share(
        &self,
        money: &Money,
        ratio: impl IntoDecimal,
        total: impl IntoDecimal,
    ) -> MoneyResult<Money> {
        let (ratio, total) = (ratio.into_decimal()?, total.into_decimal()?);
        let precision = self.reference_precision(money)?;
        let share = AllocationUtil::share(money.amount(), ratio, total, precision)?;
        Ok(money.with_amount(share))
    }

    fn floor(&self, money: &Money) -> MoneyResult<Money> {
        let step = if self.comparator.is_negative(money) {
            Decimal::NEGATIVE_ONE
        } else {
            Decimal::ZERO
        };
        self.add(money, &[money.with_amount(step)])
    }

    fn allocate<I>(&self, money: &Money, ratios: I) -> MoneyResult<Vec<Money>>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let ratios = ratios
            .into_iter()
            .map(IntoDecimal::into_decimal)
            .collect::<MoneyResult<Vec<_>>>()?;
        let precision = self.reference_precision(money)?;

        let shares = AllocationUtil::allocate_by_ratios(money.amount(), &ratios, precision)?;
        Ok(shares.into_iter().map(|s| money.with_amount(s)).collect())
    }

    fn allocate_to(&self, money: &Money, n: usize) -> MoneyResult<Vec<Money>> {
        let precision = self.reference_precision(money)?;
        let shares = AllocationUtil::allocate_equal(money.amount(), n, precision)?;
        Ok(shares.into_iter().map(|s| money.with_amount(s)).collect())
    }

    fn absolute(&self, money: &Money) -> Money {
        money.with_amount(money.amount().abs())
    }

    fn negative(&self, money: &Money) -> MoneyResult<Money> {
        let zero = Money::zero(money.currency().clone());
        self.subtract(&zero, std::slice::from_ref(money))
    }

    fn min(&self, first: &Money, others: &[Money]) -> Money {
        self.pick(first, others, |m, candidate| self.comparator.less_than(m, candidate))
    }

    fn max(&self, first: &Money, others: &[Money]) -> Money {
        self.pick(first, others, |m, candidate| {
            self.comparator.greater_than(m, candidate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::StaticPrecisions;
    use pecunia_shared::CurrencyCode;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn calculator() -> DecimalCalculator<StaticPrecisions> {
        DecimalCalculator::new(StaticPrecisions::new([
            ("EUR", 2),
            ("CHF", 2),
            ("JPY", 0),
            ("BHD", 3),
            ("DUM", 0),
            ("XXX", 0),
            ("P28", 28),
        ]))
    }

    fn money(amount: Decimal, code: &str) -> Money {
        Money::new(amount, CurrencyCode::new(code).unwrap())
    }

    // =========================================================================
    // add / subtract
    // =========================================================================

    #[test]
    fn test_add_three_amounts() {
        let a = money(dec!(14), "EUR");
        let result = calculator().add(&a, &[a.clone(), a.clone()]).unwrap();
        assert_eq!(result, money(dec!(42), "EUR"));
        assert_eq!(result.amount().to_string(), "42.00");
    }

    #[test]
    fn test_add_different_currencies() {
        let err = calculator()
            .add(&money(dec!(14), "EUR"), &[money(dec!(14), "CHF")])
            .unwrap_err();
        assert_eq!(err, MoneyError::currency_mismatch("EUR", "CHF"));
    }

    #[test]
    fn test_add_mismatch_anywhere_aborts() {
        let eur = money(dec!(1), "EUR");
        let result = calculator().add(&eur, &[eur.clone(), money(dec!(1), "CHF"), eur.clone()]);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_add_without_addends_normalizes() {
        let result = calculator().add(&money(dec!(1.239), "EUR"), &[]).unwrap();
        assert_eq!(result.amount().to_string(), "1.23");
    }

    #[test]
    fn test_add_unknown_currency() {
        let result = calculator().add(&money(dec!(1), "USD"), &[]);
        assert!(matches!(result, Err(MoneyError::InvalidCurrencyCode { .. })));
    }

    #[test]
    fn test_subtract() {
        let a = money(dec!(14), "EUR");
        let result = calculator().subtract(&a, &[a.clone(), a.clone()]).unwrap();
        assert_eq!(result.amount().to_string(), "-14.00");
    }

    #[test]
    fn test_subtract_different_currencies() {
        let result = calculator().subtract(&money(dec!(14), "EUR"), &[money(dec!(14), "CHF")]);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_operands_are_not_modified() {
        let a = money(dec!(10.5), "EUR");
        let b = money(dec!(2.25), "EUR");
        let _ = calculator().add(&a, std::slice::from_ref(&b)).unwrap();
        assert_eq!(a.amount(), dec!(10.5));
        assert_eq!(b.amount(), dec!(2.25));
    }

    // =========================================================================
    // multiply / divide
    // =========================================================================

    #[rstest]
    #[case("1")]
    #[case("1.0")]
    #[case("1.")]
    fn test_multiply_by_one_text(#[case] multiplier: &str) {
        let result = calculator().multiply(&money(dec!(14), "EUR"), multiplier).unwrap();
        assert_eq!(result.amount().to_string(), "14.00");
    }

    #[test]
    fn test_multiply_truncates() {
        let calc = calculator();
        let price = money(dec!(19.99), "EUR");
        assert_eq!(calc.multiply(&price, dec!(0.333)).unwrap().amount(), dec!(6.65));
        assert_eq!(calc.multiply(&price, 3).unwrap().amount(), dec!(59.97));
        assert_eq!(
            calc.multiply(&money(dec!(-19.99), "EUR"), dec!(0.333)).unwrap().amount(),
            dec!(-6.65)
        );
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = calculator();
        let m = money(dec!(14), "EUR");
        assert_eq!(calc.divide(&m, 0), Err(MoneyError::DivisionByZero));
        assert_eq!(calc.divide(&m, "0.00"), Err(MoneyError::DivisionByZero));
        assert_eq!(calc.divide(&m, dec!(-0)), Err(MoneyError::DivisionByZero));
    }

    #[rstest]
    #[case(dec!(10), 3, dec!(3.33))]
    #[case(dec!(-10), 3, dec!(-3.33))]
    #[case(dec!(2), 3, dec!(0.66))]
    #[case(dec!(14), 1, dec!(14))]
    fn test_divide_truncates_toward_zero(
        #[case] amount: Decimal,
        #[case] divisor: i32,
        #[case] expected: Decimal,
    ) {
        let result = calculator().divide(&money(amount, "EUR"), divisor).unwrap();
        assert_eq!(result.amount(), expected);
    }

    #[test]
    fn test_divide_uses_currency_precision() {
        let calc = calculator();
        assert_eq!(calc.divide(&money(dec!(10), "JPY"), 3).unwrap().amount().to_string(), "3");
        assert_eq!(calc.divide(&money(dec!(10), "BHD"), 3).unwrap().amount().to_string(), "3.333");
    }

    #[test]
    fn test_multiply_rejects_bad_scalar() {
        let result = calculator().multiply(&money(dec!(1), "EUR"), "abc");
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    // =========================================================================
    // modulo
    // =========================================================================

    #[test]
    fn test_modulo() {
        let calc = calculator();
        let result = calc.modulo(&money(dec!(10), "EUR"), &money(dec!(3), "EUR")).unwrap();
        assert_eq!(result.amount(), dec!(1));
        let result = calc.modulo(&money(dec!(-10.50), "EUR"), &money(dec!(3), "EUR")).unwrap();
        assert_eq!(result.amount(), dec!(-1.50));
        let result = calc.modulo(&money(dec!(9), "EUR"), &money(dec!(3), "EUR")).unwrap();
        assert!(result.is_zero());
        assert_eq!(result.currency().as_str(), "EUR");
    }

    #[test]
    fn test_modulo_by_zero() {
        let result = calculator().modulo(&money(dec!(10), "EUR"), &money(dec!(0), "EUR"));
        assert_eq!(result, Err(MoneyError::ModuloByZero));
        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_modulo_different_currencies() {
        let result = calculator().modulo(&money(dec!(10), "EUR"), &money(dec!(3), "CHF"));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    // =========================================================================
    // absolute / negative / floor
    // =========================================================================

    #[test]
    fn test_absolute_keeps_scale_and_currency() {
        let result = calculator().absolute(&money(dec!(-12.345), "EUR"));
        assert_eq!(result.amount().to_string(), "12.345");
        assert_eq!(result.currency().as_str(), "EUR");
    }

    #[test]
    fn test_negative() {
        let calc = calculator();
        assert_eq!(calc.negative(&money(dec!(12.5), "EUR")).unwrap().amount(), dec!(-12.5));
        assert_eq!(calc.negative(&money(dec!(-3), "EUR")).unwrap().amount(), dec!(3));
        let zero = calc.negative(&money(dec!(0), "EUR")).unwrap();
        assert_eq!(zero.amount().to_string(), "0.00");
    }

    #[rstest]
    #[case(dec!(12.75), "12.75")]
    #[case(dec!(12), "12.00")]
    #[case(dec!(12.759), "12.75")]
    #[case(dec!(0.99), "0.99")]
    #[case(dec!(0), "0.00")]
    #[case(dec!(-12.25), "-13.25")]
    #[case(dec!(-12), "-13.00")]
    #[case(dec!(-0.001), "-1.00")]
    fn test_floor(#[case] amount: Decimal, #[case] expected: &str) {
        let result = calculator().floor(&money(amount, "EUR")).unwrap();
        assert_eq!(result.amount().to_string(), expected);
        assert_eq!(result.currency().as_str(), "EUR");
    }

    #[test]
    fn test_floor_zero_precision() {
        let calc = calculator();
        assert_eq!(calc.floor(&money(dec!(7.9), "JPY")).unwrap().amount().to_string(), "7");
        assert_eq!(calc.floor(&money(dec!(-7.9), "JPY")).unwrap().amount().to_string(), "-8");
    }

    // =========================================================================
    // min / max / sum / average
    // =========================================================================

    #[test]
    fn test_min_max() {
        let calc = calculator();
        let values = [money(dec!(5), "EUR"), money(dec!(-2), "EUR"), money(dec!(9), "EUR")];
        let first = money(dec!(3), "EUR");
        assert_eq!(calc.min(&first, &values).amount(), dec!(-2));
        assert_eq!(calc.max(&first, &values).amount(), dec!(9));
        assert_eq!(calc.min(&first, &[]).amount(), dec!(3));
    }

    #[test]
    fn test_min_max_ties_keep_earliest() {
        let calc = calculator();
        let first = money(dec!(1.0), "EUR");
        let tie = money(dec!(1.00), "EUR");
        assert_eq!(calc.min(&first, std::slice::from_ref(&tie)).amount().to_string(), "1.0");
        assert_eq!(calc.max(&first, std::slice::from_ref(&tie)).amount().to_string(), "1.0");
    }

    #[test]
    fn test_min_max_mixed_currencies_first_wins() {
        let calc = calculator();
        let first = money(dec!(10), "EUR");
        let others = [money(dec!(1), "CHF"), money(dec!(100), "CHF")];
        assert_eq!(calc.min(&first, &others), first);
        assert_eq!(calc.max(&first, &others), first);
    }

    #[test]
    fn test_sum_and_average() {
        let calc = calculator();
        let first = money(dec!(10), "EUR");
        let others = [money(dec!(20), "EUR"), money(dec!(5), "EUR")];
        assert_eq!(calc.sum(&first, &others).unwrap().amount(), dec!(35));
        assert_eq!(calc.average(&first, &others).unwrap().amount(), dec!(11.66));
        assert_eq!(calc.average(&first, &[]).unwrap().amount(), dec!(10));
    }

    #[test]
    fn test_average_different_currencies() {
        let result = calculator().average(&money(dec!(1), "EUR"), &[money(dec!(1), "JPY")]);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    // =========================================================================
    // share / allocate
    // =========================================================================

    #[test]
    fn test_share() {
        let calc = calculator();
        let result = calc.share(&money(dec!(100), "EUR"), 1, 3).unwrap();
        assert_eq!(result.amount(), dec!(33.33));
        let result = calc.share(&money(dec!(100), "EUR"), "1", "0");
        assert_eq!(result, Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_allocate_to_twelve() {
        let shares = calculator().allocate_to(&money(dec!(12), "DUM"), 12).unwrap();
        assert_eq!(shares.len(), 12);
        for share in &shares {
            assert_eq!(share, &money(dec!(1), "DUM"));
        }
    }

    #[test]
    fn test_allocate_largest_remainder() {
        let shares = calculator().allocate(&money(dec!(100), "XXX"), [1, 1, 1]).unwrap();
        let amounts: Vec<Decimal> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![dec!(34), dec!(33), dec!(33)]);
        assert!(shares.iter().all(|s| s.currency().as_str() == "XXX"));
    }

    #[test]
    fn test_allocate_with_text_ratios() {
        let shares = calculator()
            .allocate(&money(dec!(0.05), "EUR"), ["0.3", "0.7"])
            .unwrap();
        let amounts: Vec<Decimal> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![dec!(0.02), dec!(0.03)]);
    }

    #[test]
    fn test_allocate_at_precision_28_conserves_total() {
        let m = money(dec!(2), "P28");
        let shares = calculator().allocate(&m, [1, 1, 1]).unwrap();
        let total = shares.iter().map(Money::amount).sum::<Decimal>();
        assert_eq!(total, dec!(2));
        assert_eq!(shares[2].amount().to_string(), "0.6666666666666666666666666666");
    }

    #[test]
    fn test_allocate_to_conserves_sub_precision_digits() {
        let factory = crate::factory::MoneyFactory::new(StaticPrecisions::new([("EUR", 2)]));
        let m = factory.create("10.009", "EUR").unwrap();
        let shares = calculator().allocate_to(&m, 2).unwrap();
        let amounts: Vec<Decimal> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![dec!(5.005), dec!(5.004)]);
        assert_eq!(amounts.iter().sum::<Decimal>(), m.amount());
    }

    #[test]
    fn test_allocate_invalid_ratios() {
        let calc = calculator();
        let m = money(dec!(100), "EUR");
        assert!(calc.allocate(&m, [0, 0]).unwrap_err().is_invalid_argument());
        assert!(calc.allocate(&m, [3, -1]).unwrap_err().is_invalid_argument());
        assert!(calc.allocate(&m, Vec::<i32>::new()).unwrap_err().is_invalid_argument());
        assert!(calc.allocate_to(&m, 0).unwrap_err().is_invalid_argument());
    }
}
