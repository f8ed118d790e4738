//! Settlement Service - Invoice settlement computation over HTTP.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
