//! Backend trait definitions

use crate::{
    Result,
    models::{DefaultGwResponse, InterfaceStatusResponse},
};

/// The three endpoints the console consumes from the failover backend
///
/// Implementations return `Ok` only for a completed request with status 200
/// and a body of the expected shape; everything else is an error of the
/// fetch-failure class.
#[async_trait::async_trait]
pub trait FailoverBackend: Send + Sync {
    /// `GET /get_default_gw`
    async fn get_default_gw(&self) -> Result<DefaultGwResponse>;

    /// `GET /set_default_gw?interface=<interface>`
    async fn set_default_gw(&self, interface: &str) -> Result<DefaultGwResponse>;

    /// `GET /get_interface_status`
    async fn get_interface_status(&self) -> Result<InterfaceStatusResponse>;
}
