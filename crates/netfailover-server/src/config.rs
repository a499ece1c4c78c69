use netfailover_client::HttpClientConfig;
use netfailover_core::Error;
use netfailover_ui::{PollConfig, ResponseOrdering, UiConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl BackendConfig {
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: self.base_url.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

impl ConsoleConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Invalid YAML: {}", e)))?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("NETFAILOVER_BACKEND_URL") {
            self.backend.base_url = val;
        }

        if let Ok(val) = std::env::var("NETFAILOVER_POLL_INTERVAL_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.poll.gateway_interval_ms = ms;
                self.poll.interface_interval_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("NETFAILOVER_RESPONSE_ORDERING") {
            match val.parse::<ResponseOrdering>() {
                Ok(ordering) => self.poll.response_ordering = ordering,
                Err(e) => eprintln!("Warning: {}, using default", e),
            }
        }

        if let Ok(val) = std::env::var("NETFAILOVER_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("NETFAILOVER_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                self.ui.port = port;
            }
        }

        if let Ok(val) = std::env::var("NETFAILOVER_HOST") {
            self.ui.host = val;
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.poll.validate().map_err(Error::ConfigValidation)?;
        self.ui.validate().map_err(Error::ConfigValidation)?;
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::ConfigValidation(
                "backend.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("netfailover/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}
