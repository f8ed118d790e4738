//! Stage 1: line item resolution.

use crate::models::{
    coerce_non_negative_or_default, ExistingItemRow, LineItemInput, ResolveMode, ResolvedItem,
    ResolvedItemRow, ResolvedLineItems,
};
use rust_decimal::Decimal;

/// Price every input line and accumulate the subtotal and total quantity.
///
/// Malformed or negative numeric fields degrade to zero. Line amounts are not
/// clamped, so a discount larger than the gross line value yields a negative amount.
/// Arithmetic beyond the `Decimal` range saturates at `Decimal::MAX`/`Decimal::MIN`.
pub fn resolve_line_items(items: &[LineItemInput], mode: ResolveMode) -> ResolvedLineItems {
    let mut subtotal = Decimal::ZERO;
    let mut total_qty = Decimal::ZERO;

    let item_rows = items
        .iter()
        .map(|input| {
            let item = resolve_item(input);
            subtotal = subtotal.saturating_add(item.amount);
            total_qty = total_qty.saturating_add(item.quantity);

            match mode {
                ResolveMode::Create => ResolvedItemRow::New(item),
                ResolveMode::Edit => ResolvedItemRow::Existing(ExistingItemRow {
                    id: input.id.clone(),
                    item,
                }),
            }
        })
        .collect();

    ResolvedLineItems {
        item_rows,
        subtotal,
        total_qty,
    }
}

fn resolve_item(input: &LineItemInput) -> ResolvedItem {
    let quantity = coerce_non_negative_or_default(input.quantity.as_ref(), Decimal::ZERO);
    let rate = coerce_non_negative_or_default(input.rate.as_ref(), Decimal::ZERO);
    let discount_amount =
        coerce_non_negative_or_default(input.discount_amount.as_ref(), Decimal::ZERO);

    ResolvedItem {
        product_id: input.product_id.clone(),
        product_item_detail_id: input.product_item_detail_id.clone(),
        hsn_code: input.hsn_code.clone(),
        product_name_snapshot: input.product_name_snapshot.clone(),
        net_weight: input.net_weight.clone(),
        gross_weight: input.gross_weight.clone(),
        wastage: input.wastage.clone(),
        quantity,
        rate,
        discount_amount,
        amount: quantity.saturating_mul(rate).saturating_sub(discount_amount),
    }
}
