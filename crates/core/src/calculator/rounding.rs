//! Scale normalization at a currency's reference precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Truncates toward zero and pins the scale to exactly `precision`.
pub(crate) fn truncate(value: Decimal, precision: u32) -> Decimal {
    pin(value.round_dp_with_strategy(precision, RoundingStrategy::ToZero), precision)
}

fn pin(mut value: Decimal, precision: u32) -> Decimal {
    if value.scale() < precision {
        value.rescale(precision);
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}
