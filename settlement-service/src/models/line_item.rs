//! Line item model for settlement-service.

use super::amount::{RawAmount, RecordId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One requested product line, as supplied by the invoice workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Existing row identifier; only read in [`ResolveMode::Edit`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub product_id: RecordId,
    #[serde(default)]
    pub product_item_detail_id: Option<RecordId>,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub product_name_snapshot: Option<String>,
    #[serde(default)]
    pub net_weight: Option<Value>,
    #[serde(default)]
    pub gross_weight: Option<Value>,
    #[serde(default)]
    pub wastage: Option<Value>,
    #[serde(default)]
    pub quantity: Option<RawAmount>,
    #[serde(default)]
    pub rate: Option<RawAmount>,
    #[serde(default)]
    pub discount_amount: Option<RawAmount>,
}

impl LineItemInput {
    /// A bare line for `product_id` with every optional field empty.
    pub fn new(product_id: impl Into<RecordId>) -> Self {
        Self {
            id: None,
            product_id: product_id.into(),
            product_item_detail_id: None,
            hsn_code: None,
            product_name_snapshot: None,
            net_weight: None,
            gross_weight: None,
            wastage: None,
            quantity: None,
            rate: None,
            discount_amount: None,
        }
    }

    pub fn priced(
        mut self,
        quantity: impl Into<RawAmount>,
        rate: impl Into<RawAmount>,
        discount_amount: impl Into<RawAmount>,
    ) -> Self {
        self.quantity = Some(quantity.into());
        self.rate = Some(rate.into());
        self.discount_amount = Some(discount_amount.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Whether resolved rows describe fresh creations or edits of existing rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    #[default]
    Create,
    Edit,
}

/// A priced line: the pass-through fields plus coerced numbers and the line amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub product_id: RecordId,
    pub product_item_detail_id: Option<RecordId>,
    pub hsn_code: Option<String>,
    pub product_name_snapshot: Option<String>,
    pub net_weight: Option<Value>,
    pub gross_weight: Option<Value>,
    pub wastage: Option<Value>,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub discount_amount: Decimal,
    /// `quantity * rate - discount_amount`; may be negative.
    pub amount: Decimal,
}

/// A resolved row for an edit, keyed by the row it replaces. `id` serializes as
/// `null` when the caller did not supply one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExistingItemRow {
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub item: ResolvedItem,
}

/// Output row of the line item resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedItemRow {
    New(ResolvedItem),
    Existing(ExistingItemRow),
}

impl ResolvedItemRow {
    pub fn item(&self) -> &ResolvedItem {
        match self {
            ResolvedItemRow::New(item) => item,
            ResolvedItemRow::Existing(row) => &row.item,
        }
    }

    /// The pre-existing identifier, if this row is an edit.
    pub fn id(&self) -> Option<&RecordId> {
        match self {
            ResolvedItemRow::New(_) => None,
            ResolvedItemRow::Existing(row) => row.id.as_ref(),
        }
    }
}

/// Aggregated output of the line item resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLineItems {
    pub item_rows: Vec<ResolvedItemRow>,
    pub subtotal: Decimal,
    pub total_qty: Decimal,
}
