//! Invoice settlement engine.
//!
//! Five pure stages run strictly in order:
//!
//! 1. [`resolve_line_items`] prices each line and accumulates the subtotal.
//! 2. [`compute_header_discount`] derives the header discount, capped at the subtotal.
//! 3. [`compute_total`] adds CGST and SGST to the discounted subtotal.
//! 4. [`apply_adjustments`] subtracts adjustments; the only stage that can fail.
//! 5. [`reconcile_payments`] turns payments into amount due or refund owed.
//!
//! No stage performs I/O or keeps state, so the engine may be called concurrently
//! from any number of tasks.

mod adjustments;
mod discount;
mod error;
mod line_items;
mod payments;
mod totals;

pub use adjustments::apply_adjustments;
pub use discount::compute_header_discount;
pub use error::AdjustmentOverflowError;
pub use line_items::resolve_line_items;
pub use payments::reconcile_payments;
pub use totals::compute_total;

use crate::models::{InvoiceComputationInput, InvoiceComputationResult};
use tracing::{debug, info, instrument, warn};

/// Run the full pipeline over one invoice.
#[instrument(skip(input), fields(items = input.items.len(), mode = ?input.mode))]
pub fn compute_invoice(
    input: &InvoiceComputationInput,
) -> Result<InvoiceComputationResult, AdjustmentOverflowError> {
    let resolved = resolve_line_items(&input.items, input.mode);
    debug!(subtotal = %resolved.subtotal, total_qty = %resolved.total_qty, "Line items resolved");

    let header_discount_amt = compute_header_discount(resolved.subtotal, &input.discount);
    debug!(header_discount_amt = %header_discount_amt, "Header discount computed");

    let taxed = compute_total(resolved.subtotal, header_discount_amt, &input.tax);
    debug!(total = %taxed.total, "Pre-adjustment total computed");

    let adjusted = apply_adjustments(taxed.total, &input.adjustments).inspect_err(|e| {
        warn!(attempted = %e.attempted, total = %e.total, "Adjustment exceeds invoice total");
    })?;

    let payments = reconcile_payments(&input.payments, adjusted.total);

    info!(
        total = %adjusted.total,
        total_paid = %payments.total_paid,
        amount_due = %payments.amount_due,
        refund_amount = %payments.refund_amount,
        "Invoice computed"
    );

    Ok(InvoiceComputationResult {
        item_rows: resolved.item_rows,
        subtotal: resolved.subtotal,
        total_qty: resolved.total_qty,
        header_discount_amt,
        cgst_amt: taxed.cgst_amt,
        sgst_amt: taxed.sgst_amt,
        total: adjusted.total,
        total_adjustment: adjusted.total_adjustment,
        total_paid: payments.total_paid,
        refund_amount: payments.refund_amount,
        amount_due: payments.amount_due,
    })
}
