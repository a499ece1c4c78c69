//! Periodic refresh of both views
//!
//! Two independent timers, one per view. Each tick spawns a new fetch and
//! does not wait for it, so a slow backend can have several fetches of the
//! same resource in flight at once.

use crate::ordering::ResponseOrdering;
use crate::views::{GatewayView, InterfaceStatusView};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Poll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Gateway refresh period in milliseconds (default: 3000)
    #[serde(default = "default_interval_ms")]
    pub gateway_interval_ms: u64,

    /// Interface status refresh period in milliseconds (default: 3000)
    #[serde(default = "default_interval_ms")]
    pub interface_interval_ms: u64,

    /// How overlapping responses are applied (default: arrival)
    #[serde(default)]
    pub response_ordering: ResponseOrdering,
}

fn default_interval_ms() -> u64 {
    3000
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            gateway_interval_ms: default_interval_ms(),
            interface_interval_ms: default_interval_ms(),
            response_ordering: ResponseOrdering::default(),
        }
    }
}

impl PollConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.gateway_interval_ms == 0 {
            return Err("gateway_interval_ms must be greater than 0".to_string());
        }
        if self.interface_interval_ms == 0 {
            return Err("interface_interval_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Timer tasks of a started poller
///
/// Dropping the handles does not stop polling.
pub struct PollerHandles {
    pub gateway: JoinHandle<()>,
    pub interfaces: JoinHandle<()>,
}

/// Drives both views without operator action
pub struct Poller {
    gateway: GatewayView,
    interfaces: InterfaceStatusView,
    gateway_period: Duration,
    interface_period: Duration,
}

impl Poller {
    pub fn new(gateway: GatewayView, interfaces: InterfaceStatusView, config: &PollConfig) -> Self {
        Self {
            gateway,
            interfaces,
            gateway_period: Duration::from_millis(config.gateway_interval_ms),
            interface_period: Duration::from_millis(config.interface_interval_ms),
        }
    }

    /// Start both timers. The first refresh happens one period after start.
    pub fn start(self) -> PollerHandles {
        let gateway = self.gateway;
        let gateway_task = spawn_timer("gateway", self.gateway_period, move || {
            let view = gateway.clone();
            Box::pin(async move {
                if let Err(e) = view.refresh_default_gateway().await {
                    debug!("Default gateway refresh failed: {}", e);
                }
            })
        });

        let interfaces = self.interfaces;
        let interface_task = spawn_timer("interfaces", self.interface_period, move || {
            let view = interfaces.clone();
            Box::pin(async move {
                if let Err(e) = view.refresh_interface_status().await {
                    debug!("Interface status refresh failed: {}", e);
                }
            })
        });

        PollerHandles {
            gateway: gateway_task,
            interfaces: interface_task,
        }
    }
}

fn spawn_timer<F>(name: &'static str, period: Duration, refresh: F) -> JoinHandle<()>
where
    F: Fn() -> BoxFuture<'static, ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        debug!("Started {} poll timer ({:?})", name, period);

        loop {
            ticker.tick().await;
            tokio::spawn(refresh());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollConfig::default();
        assert_eq!(config.gateway_interval_ms, 3000);
        assert_eq!(config.interface_interval_ms, 3000);
        assert_eq!(config.response_ordering, ResponseOrdering::Arrival);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = PollConfig {
            gateway_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PollConfig {
            interface_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: PollConfig =
            serde_json::from_str(r#"{"response_ordering": "sequenced"}"#).unwrap();
        assert_eq!(config.gateway_interval_ms, 3000);
        assert_eq!(config.response_ordering, ResponseOrdering::Sequenced);
    }
}
