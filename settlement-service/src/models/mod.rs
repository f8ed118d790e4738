//! Domain models for settlement-service.

mod adjustment;
mod amount;
mod discount;
mod invoice;
mod line_item;
mod payment;
mod tax;

pub use adjustment::{AdjustedTotal, AdjustmentEntry};
pub use amount::{
    coerce_non_negative_or_default, coerce_or_default, parse_non_negative_or_default,
    parse_number_or_default, RawAmount, RecordId,
};
pub use discount::{DiscountType, HeaderDiscountPolicy};
pub use invoice::{InvoiceComputationInput, InvoiceComputationResult, SettlementStatus};
pub use line_item::{
    ExistingItemRow, LineItemInput, ResolveMode, ResolvedItem, ResolvedItemRow, ResolvedLineItems,
};
pub use payment::{PaymentEntry, PaymentSummary};
pub use tax::{TaxComponents, TaxedTotal};
