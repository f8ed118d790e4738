//! HTTP middleware for settlement-service.

pub mod metrics;
