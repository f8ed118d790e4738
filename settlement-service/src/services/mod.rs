//! Services module for settlement-service.

pub mod engine;
pub mod metrics;

pub use metrics::{get_metrics, init_metrics};
