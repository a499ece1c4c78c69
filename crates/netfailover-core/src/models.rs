//! Wire types for the backend endpoints and the state each view holds
//!
//! The backend speaks two body shapes:
//! - `{ "default_gw": "<name>" }` from `/get_default_gw` and `/set_default_gw`
//! - `{ "interfaceStatus": [{ "ifName": "...", "status": "..." }] }` from
//!   `/get_interface_status`

use serde::{Deserialize, Serialize};

/// Body of `/get_default_gw` and `/set_default_gw`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultGwResponse {
    pub default_gw: String,
}

/// Body of `/get_interface_status`
///
/// The backend serializes protobuf messages to JSON, which omits empty
/// repeated fields, so a missing `interfaceStatus` is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStatusResponse {
    #[serde(default)]
    pub interface_status: Vec<InterfaceStatusEntry>,
}

/// One row of the interface table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceStatusEntry {
    /// Interface name (`ifName` on the wire)
    #[serde(rename = "ifName")]
    pub name: String,

    /// Opaque, backend-defined state string ("HEALTHY", "down", ...)
    #[serde(default)]
    pub status: String,

    /// Human-readable time of the backend's last check, when reported
    #[serde(
        rename = "lastCheckedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_checked_at: Option<String>,
}

impl InterfaceStatusEntry {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            last_checked_at: None,
        }
    }
}

/// Currently active default gateway, as last applied from a response
///
/// `None` until the first successful gateway response is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayState {
    pub default_gateway: Option<String>,
}

impl From<DefaultGwResponse> for GatewayState {
    fn from(response: DefaultGwResponse) -> Self {
        Self {
            default_gateway: Some(response.default_gw),
        }
    }
}

/// Ordered interface rows, as last applied from a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceStatusList {
    entries: Vec<InterfaceStatusEntry>,
}

impl InterfaceStatusList {
    pub fn new(entries: Vec<InterfaceStatusEntry>) -> Self {
        Self { entries }
    }

    /// Entry currently occupying `row`, if any
    pub fn get(&self, row: usize) -> Option<&InterfaceStatusEntry> {
        self.entries.get(row)
    }

    pub fn entries(&self) -> &[InterfaceStatusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceStatusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<InterfaceStatusResponse> for InterfaceStatusList {
    fn from(response: InterfaceStatusResponse) -> Self {
        Self::new(response.interface_status)
    }
}

#[cfg(test)]
mod tests;
