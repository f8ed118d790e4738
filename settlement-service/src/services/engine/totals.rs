//! Stage 3: tax and total aggregation.

use crate::models::{coerce_non_negative_or_default, TaxComponents, TaxedTotal};
use rust_decimal::Decimal;

/// `subtotal - header_discount_amt + cgst + sgst`. Tax is always additive; negative
/// or malformed tax amounts count as zero. Sums beyond the `Decimal` range saturate.
pub fn compute_total(
    subtotal: Decimal,
    header_discount_amt: Decimal,
    tax: &TaxComponents,
) -> TaxedTotal {
    let cgst_amt = coerce_non_negative_or_default(tax.cgst_amount.as_ref(), Decimal::ZERO);
    let sgst_amt = coerce_non_negative_or_default(tax.sgst_amount.as_ref(), Decimal::ZERO);

    TaxedTotal {
        total: subtotal
            .saturating_sub(header_discount_amt)
            .saturating_add(cgst_amt)
            .saturating_add(sgst_amt),
        cgst_amt,
        sgst_amt,
    }
}
