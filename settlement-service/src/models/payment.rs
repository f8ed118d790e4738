//! Payment model for settlement-service.

use super::amount::RawAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment received against the invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    #[serde(default)]
    pub amount_received: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
}

impl PaymentEntry {
    pub fn new(amount: impl Into<RawAmount>) -> Self {
        Self {
            amount_received: Some(amount.into()),
            ..Default::default()
        }
    }
}

/// Outcome of comparing payments against the final total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub total_paid: Decimal,
    pub refund_amount: Decimal,
    pub amount_due: Decimal,
}
