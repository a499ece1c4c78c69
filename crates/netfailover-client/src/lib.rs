//! Net Failover Manager backend client
//!
//! This crate provides the HTTP connector to the failover backend:
//! - Shared reqwest client construction
//! - `HttpBackend`, the `FailoverBackend` implementation over plain GETs

pub mod client;
pub mod http_backend;

pub use client::{HttpClientConfig, create_client};
pub use http_backend::HttpBackend;
