//! Web UI server implementation

use crate::{AppState, Console, handlers};
use axum::{
    Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// UI server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Host to bind to (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser reload interval of the status page in seconds (default: 3)
    #[serde(default = "default_page_refresh_secs")]
    pub page_refresh_secs: u64,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_page_refresh_secs() -> u64 { 3 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            page_refresh_secs: default_page_refresh_secs(),
        }
    }
}

impl UiConfig {
    /// A zero refresh interval would make the browser reload continuously
    pub fn validate(&self) -> Result<(), String> {
        if self.page_refresh_secs == 0 {
            return Err("page_refresh_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))
    }
}

/// UI Server
pub struct UiServer {
    config: UiConfig,
    console: Console,
}

impl UiServer {
    /// Create a new UI server
    pub fn new(config: UiConfig, console: Console) -> Self {
        Self { config, console }
    }

    /// Build the Axum router with all routes
    pub fn router(&self) -> Router {
        let state = AppState {
            console: self.console.clone(),
            config: self.config.clone(),
        };

        Router::new()
            // HTML page
            .route("/", get(handlers::page::status_page))

            // Operator actions
            .route(
                "/interfaces/{row}/set-default",
                post(handlers::actions::set_default),
            )

            // Static assets (embedded in binary)
            .route("/static/css/style.css", get(handlers::static_files::serve_css))

            // JSON API endpoints
            .route("/api/state", get(handlers::api::state_snapshot))
            .route("/healthz", get(handlers::api::healthz))

            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the UI server and run until `shutdown` resolves
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.socket_addr()?;
        let router = self.router();

        info!("📡 Net failover console starting on http://{}", addr);
        info!("   Status page: http://{}/", addr);
        info!("   State API:   http://{}/api/state", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_page_refresh_rejected() {
        let config = UiConfig {
            page_refresh_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
