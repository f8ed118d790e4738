#![allow(dead_code)]

use serde_json::Value;
use settlement_service::config::SettlementConfig;
use settlement_service::startup::Application;

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(SettlementConfig::for_tests()).await
    }

    pub async fn spawn_with(config: SettlementConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
            client,
        }
    }

    /// POST a computation request and return status plus parsed JSON body.
    pub async fn compute(&self, body: &Value) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .post(format!("{}/invoices/compute", self.http_address))
            .json(body)
            .send()
            .await
            .expect("Failed to send compute request");

        let status = response.status();
        let json = response.json().await.expect("Response body was not JSON");
        (status, json)
    }
}

/// The two-line invoice used across tests: subtotal 240, quantity 3.
pub fn sample_request() -> Value {
    serde_json::json!({
        "items": [
            { "product_id": 1, "quantity": 2, "rate": 100, "discount_amount": 0 },
            { "product_id": 2, "quantity": 1, "rate": 50, "discount_amount": 10 }
        ],
        "discount": { "discount_amount": 10, "discount_type": "Percentage" },
        "tax": { "cgst_amount": 5, "sgst_amount": 5 },
        "adjustments": [ { "adjustment_amount": 26 } ],
        "payments": [ { "amount_received": 120 } ]
    })
}

/// Read a decimal-string field as an exact string after normalizing trailing zeros.
pub fn amount(body: &Value, key: &str) -> String {
    let raw = body[key]
        .as_str()
        .unwrap_or_else(|| panic!("{key} missing or not a string: {body}"));
    let d: rust_decimal::Decimal = raw.parse().expect("not a decimal");
    d.normalize().to_string()
}
