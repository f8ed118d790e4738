//! Invoice computation input and result for settlement-service.

use super::adjustment::AdjustmentEntry;
use super::discount::HeaderDiscountPolicy;
use super::line_item::{LineItemInput, ResolveMode, ResolvedItemRow};
use super::payment::PaymentEntry;
use super::tax::TaxComponents;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything the pipeline needs to settle one invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceComputationInput {
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub mode: ResolveMode,
    #[serde(default)]
    pub discount: HeaderDiscountPolicy,
    #[serde(default)]
    pub tax: TaxComponents,
    #[serde(default)]
    pub adjustments: Vec<AdjustmentEntry>,
    #[serde(default)]
    pub payments: Vec<PaymentEntry>,
}

/// Fully resolved financial breakdown of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceComputationResult {
    pub item_rows: Vec<ResolvedItemRow>,
    pub subtotal: Decimal,
    pub total_qty: Decimal,
    pub header_discount_amt: Decimal,
    pub cgst_amt: Decimal,
    pub sgst_amt: Decimal,
    /// Post-discount, post-tax, post-adjustment.
    pub total: Decimal,
    pub total_adjustment: Decimal,
    pub total_paid: Decimal,
    pub refund_amount: Decimal,
    pub amount_due: Decimal,
}

/// Settlement state implied by a computed result.
///
/// Read-only classification; moving an invoice between states is the invoice
/// workflow's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
    Refunded,
}

impl SettlementStatus {
    pub fn of(result: &InvoiceComputationResult) -> Self {
        if result.refund_amount > Decimal::ZERO {
            SettlementStatus::Refunded
        } else if result.amount_due == Decimal::ZERO {
            SettlementStatus::FullyPaid
        } else if result.total_paid > Decimal::ZERO {
            SettlementStatus::PartiallyPaid
        } else {
            SettlementStatus::Unpaid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementStatus::Unpaid => "unpaid",
            SettlementStatus::PartiallyPaid => "partially_paid",
            SettlementStatus::FullyPaid => "fully_paid",
            SettlementStatus::Refunded => "refunded",
        }
    }
}
