//! Adjustment model for settlement-service.

use super::amount::RawAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A post-tax correction to the invoice total, e.g. a returned item credited against the bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    #[serde(default)]
    pub adjustment_amount: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl AdjustmentEntry {
    pub fn new(amount: impl Into<RawAmount>) -> Self {
        Self {
            adjustment_amount: Some(amount.into()),
            ..Default::default()
        }
    }
}

/// Total after adjustments were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustedTotal {
    pub total: Decimal,
    pub total_adjustment: Decimal,
}
