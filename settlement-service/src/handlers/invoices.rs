//! Invoice computation endpoint.

use crate::models::{
    InvoiceComputationInput, InvoiceComputationResult, ResolveMode, SettlementStatus,
};
use crate::services::engine;
use crate::services::metrics::{
    COMPUTATIONS_TOTAL, COMPUTATION_DURATION, ERRORS_TOTAL, INVOICE_AMOUNT_TOTAL,
};
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use service_core::error::AppError;
use tracing::{info, instrument, warn};

/// Computed breakdown plus the settlement status it implies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeInvoiceResponse {
    #[serde(flatten)]
    pub result: InvoiceComputationResult,
    pub settlement_status: SettlementStatus,
}

/// `POST /invoices/compute`
#[instrument(skip(state, payload))]
pub async fn compute_invoice(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceComputationInput>, JsonRejection>,
) -> Result<Json<ComputeInvoiceResponse>, AppError> {
    let Json(input) = payload.map_err(|rejection| {
        ERRORS_TOTAL.with_label_values(&["invalid_body"]).inc();
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    })?;

    let max_items = state.config.limits.max_line_items;
    if input.items.len() > max_items {
        ERRORS_TOTAL.with_label_values(&["too_many_items"]).inc();
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Invoice has {} line items, limit is {}",
            input.items.len(),
            max_items
        )));
    }

    let mode = match input.mode {
        ResolveMode::Create => "create",
        ResolveMode::Edit => "edit",
    };
    let timer = COMPUTATION_DURATION.with_label_values(&[mode]).start_timer();
    let computed = engine::compute_invoice(&input);
    timer.observe_duration();

    let result = computed.map_err(|e| {
        warn!(error = %e, "Invoice computation rejected");
        COMPUTATIONS_TOTAL.with_label_values(&["rejected"]).inc();
        ERRORS_TOTAL.with_label_values(&["adjustment_overflow"]).inc();
        AppError::from(e)
    })?;

    let settlement_status = SettlementStatus::of(&result);
    COMPUTATIONS_TOTAL
        .with_label_values(&[settlement_status.as_str()])
        .inc();
    for (figure, value) in [
        ("total", result.total),
        ("amount_due", result.amount_due),
        ("refund_amount", result.refund_amount),
    ] {
        if let Some(v) = value.to_f64().filter(|v| *v > 0.0) {
            INVOICE_AMOUNT_TOTAL.with_label_values(&[figure]).inc_by(v);
        }
    }

    info!(
        items = result.item_rows.len(),
        status = settlement_status.as_str(),
        "Invoice computation served"
    );

    Ok(Json(ComputeInvoiceResponse {
        result,
        settlement_status,
    }))
}
