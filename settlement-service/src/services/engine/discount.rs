//! Stage 2: header discount.

use crate::models::{coerce_or_default, DiscountType, HeaderDiscountPolicy};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Header discount for `subtotal`, never more than the subtotal itself.
///
/// A percentage is scaled down before multiplying, so a product beyond the `Decimal`
/// range saturates and is then capped by the subtotal.
pub fn compute_header_discount(subtotal: Decimal, policy: &HeaderDiscountPolicy) -> Decimal {
    let value = coerce_or_default(policy.discount_amount.as_ref(), Decimal::ZERO);
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let discount = match policy.kind() {
        DiscountType::Percentage => (value / HUNDRED).saturating_mul(subtotal),
        DiscountType::Amount => value,
    };

    discount.min(subtotal)
}
