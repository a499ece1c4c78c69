//! "Set Default" override action shared by both views

use crate::ordering::Completion;
use crate::views::{GatewayView, InterfaceStatusView};
use netfailover_core::{Error, Result};
use tracing::info;

/// Result of activating a row's control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideOutcome {
    /// Interface name the override request was issued for
    pub interface: String,
    pub completion: Completion,
}

/// Wires a row control of the interface region to the gateway region
#[derive(Clone)]
pub struct OverrideAction {
    interfaces: InterfaceStatusView,
    gateway: GatewayView,
}

impl OverrideAction {
    pub fn new(interfaces: InterfaceStatusView, gateway: GatewayView) -> Self {
        Self {
            interfaces,
            gateway,
        }
    }

    /// Activate the control of the row at `row`
    ///
    /// The interface name is whatever entry occupies `row` at activation
    /// time, not the entry that was there when the page was rendered.
    pub async fn activate(&self, row: usize) -> Result<OverrideOutcome> {
        let entry = self
            .interfaces
            .entry_at(row)
            .ok_or(Error::RowNotFound(row))?;

        info!("Forcing {} as default gateway", entry.name);
        let completion = self.gateway.set_default_gateway(&entry.name).await?;

        Ok(OverrideOutcome {
            interface: entry.name,
            completion,
        })
    }
}
