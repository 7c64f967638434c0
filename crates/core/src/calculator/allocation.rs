//! Amount allocation using the Largest Remainder Method.
//!
//! Splits an amount across weighted shares so that the shares add up to the
//! amount exactly, with no minor unit lost or gained:
//! 1. Express the amount as an integer count of minor units
//! 2. Give every share `floor(units * ratio / total)` units
//! 3. Hand out the leftover units one at a time, largest remainder first,
//!    ties to the lowest index, each index at most once
//!
//! All of it runs on exact integers; nothing is rounded before flooring.

use pecunia_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::debug;

/// Allocation utility for distributing decimal amounts.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocates `total` proportionally to `ratios`.
    ///
    /// Shares are whole minor units at `decimal_places`, or at the amount's
    /// own scale when it is finer, so they always sum exactly to `total`.
    /// `result[i]` belongs to `ratios[i]`.
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` if the ratios sum to zero or less, or if any ratio
    /// is negative. `Overflow` if the amount in minor units does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pecunia_core::calculator::AllocationUtil;
    ///
    /// // 100 split 1:1:1 with no decimals = [34, 33, 33]
    /// let result = AllocationUtil::allocate_by_ratios(dec!(100), &[dec!(1), dec!(1), dec!(1)], 0).unwrap();
    /// assert_eq!(result, vec![dec!(34), dec!(33), dec!(33)]);
    /// ```
    pub fn allocate_by_ratios(
        total: Decimal,
        ratios: &[Decimal],
        decimal_places: u32,
    ) -> MoneyResult<Vec<Decimal>> {
        if ratios.iter().any(|r| *r < Decimal::ZERO) {
            return Err(MoneyError::invalid_allocation(
                "ratio must be zero or positive",
            ));
        }

        let ratio_scale = common_scale(ratios.iter().copied());
        let weights = ratios
            .iter()
            .map(|r| to_units(*r, ratio_scale))
            .collect::<MoneyResult<Vec<_>>>()?;
        let weight_sum = weights
            .iter()
            .try_fold(0i128, |acc, w| acc.checked_add(*w))
            .ok_or(MoneyError::Overflow("allocate"))?;

        if weight_sum <= 0 {
            return Err(MoneyError::invalid_allocation(
                "sum of ratios must be greater than zero",
            ));
        }

        let places = decimal_places.max(total.normalize().scale());
        let units = to_units(total, places)?;

        let mut shares = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for weight in &weights {
            let product = units
                .checked_mul(*weight)
                .ok_or(MoneyError::Overflow("allocate"))?;
            shares.push(product.div_euclid(weight_sum));
            remainders.push(product.rem_euclid(weight_sum));
        }

        let allocated: i128 = shares.iter().sum();
        let leftover = usize::try_from(units - allocated)
            .ok()
            .filter(|n| *n <= shares.len())
            .ok_or_else(|| {
                MoneyError::invalid_allocation("remainder exceeds one unit per share")
            })?;

        if leftover > 0 {
            // Largest remainder first; the sort is stable so ties keep index order.
            let mut order: Vec<usize> = (0..shares.len()).collect();
            order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]));

            debug!(
                shares = shares.len(),
                leftover,
                places,
                "Distributing allocation remainder"
            );

            for index in order.into_iter().take(leftover) {
                shares[index] += 1;
            }
        }

        shares
            .into_iter()
            .map(|s| from_units(s, places))
            .collect()
    }

    /// Allocates `total` equally across `count` recipients.
    ///
    /// Earlier recipients receive the extra minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pecunia_core::calculator::AllocationUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = AllocationUtil::allocate_equal(dec!(100), 3, 2).unwrap();
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    pub fn allocate_equal(
        total: Decimal,
        count: usize,
        decimal_places: u32,
    ) -> MoneyResult<Vec<Decimal>> {
        if count == 0 {
            return Err(MoneyError::invalid_allocation(
                "cannot allocate to zero recipients",
            ));
        }
        Self::allocate_by_ratios(total, &vec![Decimal::ONE; count], decimal_places)
    }

    /// One floored share: `floor(amount * ratio / total)` at the minor unit.
    pub fn share(
        amount: Decimal,
        ratio: Decimal,
        total: Decimal,
        decimal_places: u32,
    ) -> MoneyResult<Decimal> {
        if total.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        let ratio_scale = common_scale([ratio, total]);
        let (mut numerator, mut denominator) =
            (to_units(ratio, ratio_scale)?, to_units(total, ratio_scale)?);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let places = decimal_places.max(amount.normalize().scale());
        let fine = to_units(amount, places)?
            .checked_mul(numerator)
            .ok_or(MoneyError::Overflow("share"))?
            .div_euclid(denominator);

        // floor(floor(x) / k) == floor(x / k) for a positive integer k
        let coarse = fine.div_euclid(pow10(places - decimal_places)?);
        from_units(coarse, decimal_places)
    }
}

fn common_scale(values: impl IntoIterator<Item = Decimal>) -> u32 {
    values
        .into_iter()
        .map(|v| v.normalize().scale())
        .max()
        .unwrap_or(0)
}

fn pow10(exponent: u32) -> MoneyResult<i128> {
    10i128
        .checked_pow(exponent)
        .ok_or(MoneyError::Overflow("allocate"))
}

/// `value` as an integer count of `10^-scale` units.
fn to_units(value: Decimal, scale: u32) -> MoneyResult<i128> {
    let value = value.normalize();
    let shift = scale
        .checked_sub(value.scale())
        .ok_or(MoneyError::Overflow("allocate"))?;
    value
        .mantissa()
        .checked_mul(pow10(shift)?)
        .ok_or(MoneyError::Overflow("allocate"))
}

fn from_units(units: i128, scale: u32) -> MoneyResult<Decimal> {
    Decimal::try_from_i128_with_scale(units, scale).map_err(|_| MoneyError::Overflow("allocate"))
}
