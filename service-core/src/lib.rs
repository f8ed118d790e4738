//! service-core: Shared infrastructure for the settlement workspace's services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
