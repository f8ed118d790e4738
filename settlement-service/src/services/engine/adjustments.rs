//! Stage 4: post-total adjustments.

use super::error::AdjustmentOverflowError;
use crate::models::{coerce_or_default, AdjustedTotal, AdjustmentEntry};
use rust_decimal::Decimal;

/// Subtract the summed adjustments from `total`.
///
/// Fails when the sum exceeds `total`; an adjustment equal to the total is allowed
/// and settles the invoice at zero. The sum saturates at the `Decimal` bounds.
pub fn apply_adjustments(
    total: Decimal,
    adjustments: &[AdjustmentEntry],
) -> Result<AdjustedTotal, AdjustmentOverflowError> {
    if adjustments.is_empty() {
        return Ok(AdjustedTotal {
            total,
            total_adjustment: Decimal::ZERO,
        });
    }

    let total_adjustment: Decimal = adjustments
        .iter()
        .map(|a| coerce_or_default(a.adjustment_amount.as_ref(), Decimal::ZERO))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    if total_adjustment > total {
        return Err(AdjustmentOverflowError {
            attempted: total_adjustment,
            total,
        });
    }

    Ok(AdjustedTotal {
        total: total.saturating_sub(total_adjustment).max(Decimal::ZERO),
        total_adjustment,
    })
}
