//! Net Failover Manager Core Types and Traits
//!
//! This crate provides the fundamental types shared by the console crates:
//! - Wire types for the failover backend's JSON endpoints
//! - View state (`GatewayState`, `InterfaceStatusList`)
//! - The `FailoverBackend` trait abstraction
//! - Core error types

pub mod backend;
pub mod error;
pub mod models;

pub use backend::FailoverBackend;
pub use error::{Error, Result};
pub use models::{
    DefaultGwResponse, GatewayState, InterfaceStatusEntry, InterfaceStatusList,
    InterfaceStatusResponse,
};
