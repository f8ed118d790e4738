//! Invoice computation integration tests for settlement-service.

mod common;

use common::{amount, sample_request, TestApp};
use serde_json::json;
use settlement_service::config::{LimitsConfig, SettlementConfig};

#[tokio::test]
async fn compute_returns_full_breakdown() {
    let app = TestApp::spawn().await;

    let (status, body) = app.compute(&sample_request()).await;

    assert_eq!(status, 200);
    assert_eq!(amount(&body, "subtotal"), "240");
    assert_eq!(amount(&body, "totalQty"), "3");
    assert_eq!(amount(&body, "headerDiscountAmt"), "24");
    assert_eq!(amount(&body, "cgstAmt"), "5");
    assert_eq!(amount(&body, "sgstAmt"), "5");
    assert_eq!(amount(&body, "totalAdjustment"), "26");
    assert_eq!(amount(&body, "total"), "200");
    assert_eq!(amount(&body, "totalPaid"), "120");
    assert_eq!(amount(&body, "refundAmount"), "0");
    assert_eq!(amount(&body, "amountDue"), "80");
    assert_eq!(body["settlementStatus"], "partially_paid");
    assert_eq!(body["itemRows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn compute_reports_refund_on_overpayment() {
    let app = TestApp::spawn().await;

    let mut request = sample_request();
    request["payments"] = json!([{ "amount_received": 150 }, { "amount_received": "100" }]);
    let (status, body) = app.compute(&request).await;

    assert_eq!(status, 200);
    assert_eq!(amount(&body, "totalPaid"), "250");
    assert_eq!(amount(&body, "refundAmount"), "50");
    assert_eq!(amount(&body, "amountDue"), "0");
    assert_eq!(body["settlementStatus"], "refunded");
}

#[tokio::test]
async fn compute_rejects_adjustment_overflow() {
    let app = TestApp::spawn().await;

    let mut request = sample_request();
    request["adjustments"] = json!([{ "adjustment_amount": 300 }]);
    let (status, body) = app.compute(&request).await;

    assert_eq!(status, 422);
    assert_eq!(body["error"], "Adjustment amount cannot exceed invoice total");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("300"));
    assert!(details.contains("226"));
}

#[tokio::test]
async fn compute_saturates_amounts_beyond_decimal_range() {
    let app = TestApp::spawn().await;

    let request = json!({
        "items": [{ "product_id": 1, "quantity": 1e15, "rate": 1e15 }],
        "discount": { "discount_amount": 1e27, "discount_type": "Percentage" },
        "tax": { "cgst_amount": 1e28, "sgst_amount": 1e28 }
    });
    let (status, body) = app.compute(&request).await;

    let max = rust_decimal::Decimal::MAX.to_string();
    assert_eq!(status, 200);
    assert_eq!(amount(&body, "subtotal"), max);
    assert_eq!(amount(&body, "headerDiscountAmt"), max);
    assert_eq!(amount(&body, "total"), "20000000000000000000000000000");
    assert_eq!(amount(&body, "amountDue"), "20000000000000000000000000000");
}

#[tokio::test]
async fn compute_edit_mode_keeps_row_ids() {
    let app = TestApp::spawn().await;

    let request = json!({
        "mode": "edit",
        "items": [
            { "id": 91, "product_id": 1, "quantity": 1, "rate": 10 },
            { "product_id": 2, "quantity": 1, "rate": 5 }
        ]
    });
    let (status, body) = app.compute(&request).await;

    assert_eq!(status, 200);
    let rows = body["itemRows"].as_array().unwrap();
    assert_eq!(rows[0]["id"], 91);
    assert!(rows[1]["id"].is_null());
    assert_eq!(body["settlementStatus"], "unpaid");
}

#[tokio::test]
async fn compute_tolerates_malformed_numbers() {
    let app = TestApp::spawn().await;

    let request = json!({
        "items": [
            { "product_id": "A-1", "quantity": "abc", "rate": 100 },
            { "product_id": "A-2", "quantity": 2, "rate": "12.50", "discount_amount": null }
        ],
        "payments": [ { "amount_received": {} } ]
    });
    let (status, body) = app.compute(&request).await;

    assert_eq!(status, 200);
    assert_eq!(amount(&body, "subtotal"), "25");
    assert_eq!(amount(&body, "totalQty"), "2");
    assert_eq!(amount(&body, "totalPaid"), "0");
    assert_eq!(amount(&body, "amountDue"), "25");
}

#[tokio::test]
async fn compute_rejects_missing_product_id() {
    let app = TestApp::spawn().await;

    let request = json!({ "items": [ { "quantity": 1, "rate": 10 } ] });
    let (status, body) = app.compute(&request).await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("product_id"));
}

#[tokio::test]
async fn compute_rejects_too_many_items() {
    let mut config = SettlementConfig::for_tests();
    config.limits = LimitsConfig { max_line_items: 1 };
    let app = TestApp::spawn_with(config).await;

    let (status, body) = app.compute(&sample_request()).await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("limit is 1"));
}

#[tokio::test]
async fn identical_requests_yield_identical_responses() {
    let app = TestApp::spawn().await;

    let (_, first) = app.compute(&sample_request()).await;
    let (_, second) = app.compute(&sample_request()).await;

    assert_eq!(first, second);
}
