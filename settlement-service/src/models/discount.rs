//! Header discount policy model for settlement-service.

use super::amount::RawAmount;
use serde::{Deserialize, Serialize};

/// How a header discount amount is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DiscountType {
    Percentage,
    #[default]
    Amount,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Amount => "Amount",
        }
    }

    /// Anything other than `Percentage` is a flat amount.
    pub fn from_string(s: &str) -> Self {
        match s {
            "Percentage" => DiscountType::Percentage,
            _ => DiscountType::Amount,
        }
    }
}

impl From<String> for DiscountType {
    fn from(s: String) -> Self {
        Self::from_string(&s)
    }
}

/// Invoice-level discount applied to the subtotal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderDiscountPolicy {
    #[serde(default)]
    pub discount_amount: Option<RawAmount>,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
}

impl HeaderDiscountPolicy {
    pub fn percentage(value: impl Into<RawAmount>) -> Self {
        Self {
            discount_amount: Some(value.into()),
            discount_type: Some(DiscountType::Percentage),
        }
    }

    pub fn flat(value: impl Into<RawAmount>) -> Self {
        Self {
            discount_amount: Some(value.into()),
            discount_type: Some(DiscountType::Amount),
        }
    }

    /// The effective discount type; absent means a flat amount.
    pub fn kind(&self) -> DiscountType {
        self.discount_type.unwrap_or_default()
    }
}
