//! Tax component model for settlement-service.

use super::amount::RawAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pre-computed tax amounts added to the discounted subtotal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxComponents {
    #[serde(default)]
    pub cgst_amount: Option<RawAmount>,
    #[serde(default)]
    pub sgst_amount: Option<RawAmount>,
}

impl TaxComponents {
    pub fn new(cgst_amount: impl Into<RawAmount>, sgst_amount: impl Into<RawAmount>) -> Self {
        Self {
            cgst_amount: Some(cgst_amount.into()),
            sgst_amount: Some(sgst_amount.into()),
        }
    }
}

/// Output of the tax and total aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxedTotal {
    pub total: Decimal,
    pub cgst_amt: Decimal,
    pub sgst_amt: Decimal,
}
