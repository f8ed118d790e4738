//! Stage 5: payment reconciliation.

use crate::models::{coerce_or_default, PaymentEntry, PaymentSummary};
use rust_decimal::Decimal;

/// Compare the summed payments against `total`.
///
/// Overpayment yields a refund and nothing due; otherwise the remainder is due.
/// Sums and differences beyond the `Decimal` range saturate.
pub fn reconcile_payments(payments: &[PaymentEntry], total: Decimal) -> PaymentSummary {
    let total_paid: Decimal = payments
        .iter()
        .map(|p| coerce_or_default(p.amount_received.as_ref(), Decimal::ZERO))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    if total_paid > total {
        PaymentSummary {
            total_paid,
            refund_amount: total_paid.saturating_sub(total),
            amount_due: Decimal::ZERO,
        }
    } else {
        PaymentSummary {
            total_paid,
            refund_amount: Decimal::ZERO,
            amount_due: total.saturating_sub(total_paid),
        }
    }
}
