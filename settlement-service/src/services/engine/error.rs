//! Engine errors for settlement-service.

use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;

/// Adjustments summed to more than the invoice total they were applied to.
///
/// The only fatal condition in the pipeline. Callers must abort the invoice write
/// rather than clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("adjustment amount cannot exceed invoice total (adjustments {attempted}, total {total})")]
pub struct AdjustmentOverflowError {
    /// Sum of all adjustment amounts.
    pub attempted: Decimal,
    /// Invoice total immediately before adjustment.
    pub total: Decimal,
}

impl From<AdjustmentOverflowError> for AppError {
    fn from(err: AdjustmentOverflowError) -> Self {
        AppError::UnprocessableEntity(
            "Adjustment amount cannot exceed invoice total".to_string(),
            Some(format!(
                "attempted adjustment {} against invoice total {}",
                err.attempted, err.total
            )),
        )
    }
}
