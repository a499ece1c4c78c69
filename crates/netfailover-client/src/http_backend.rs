//! `FailoverBackend` over HTTP

use crate::client::{HttpClientConfig, create_client};
use netfailover_core::{
    Error, FailoverBackend, Result,
    models::{DefaultGwResponse, InterfaceStatusResponse},
};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const GET_DEFAULT_GW: &str = "/get_default_gw";
pub const SET_DEFAULT_GW: &str = "/set_default_gw";
pub const GET_INTERFACE_STATUS: &str = "/get_interface_status";

/// Failover backend reached with plain HTTP GETs
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend connector from client configuration
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            Error::Config(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;

        Ok(Self {
            client: create_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| Error::Http(format!("Invalid URL '{}': {}", raw, e)))?;
        // An empty pair list would still leave a bare `?` behind
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Issue a GET and decode the body. Only status 200 counts as success.
    async fn fetch<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint_url(path, params)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                endpoint: path.to_string(),
                status_code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl FailoverBackend for HttpBackend {
    async fn get_default_gw(&self) -> Result<DefaultGwResponse> {
        self.fetch(GET_DEFAULT_GW, &[]).await
    }

    async fn set_default_gw(&self, interface: &str) -> Result<DefaultGwResponse> {
        self.fetch(SET_DEFAULT_GW, &[("interface", interface)]).await
    }

    async fn get_interface_status(&self) -> Result<InterfaceStatusResponse> {
        self.fetch(GET_INTERFACE_STATUS, &[]).await
    }
}
