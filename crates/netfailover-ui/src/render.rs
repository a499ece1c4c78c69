//! Pure projections of view state into page content
//!
//! Nothing here reads the backend or mutates state: identical state always
//! renders to identical output.

use askama::Template;
use netfailover_core::{GatewayState, InterfaceStatusList};

pub const GATEWAY_PREFIX: &str = "Default Gateway: ";
pub const GATEWAY_PLACEHOLDER: &str = "—";
pub const ROW_SEPARATOR: &str = " - ";
pub const SET_DEFAULT_LABEL: &str = "Set Default";

/// Text of the default gateway region
pub fn gateway_text(state: &GatewayState) -> String {
    format!(
        "{}{}",
        GATEWAY_PREFIX,
        state
            .default_gateway
            .as_deref()
            .unwrap_or(GATEWAY_PLACEHOLDER)
    )
}

/// One rendered row of the interface region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRow {
    /// Position in the region; the row's control targets this position
    pub position: usize,
    pub name: String,
    pub separator: &'static str,
    pub status: String,
    pub action_label: &'static str,
    /// Tooltip for the name label, empty when the backend sent no check time
    pub checked_title: String,
}

impl InterfaceRow {
    /// `<name> - <status>`
    pub fn label(&self) -> String {
        format!("{}{}{}", self.name, self.separator, self.status)
    }
}

/// Rows of the interface region, in list order
pub fn interface_rows(list: &InterfaceStatusList) -> Vec<InterfaceRow> {
    list.iter()
        .enumerate()
        .map(|(position, entry)| InterfaceRow {
            position,
            name: entry.name.clone(),
            separator: ROW_SEPARATOR,
            status: entry.status.clone(),
            action_label: SET_DEFAULT_LABEL,
            checked_title: entry
                .last_checked_at
                .as_deref()
                .map(|at| format!("Last checked: {}", at.trim_end()))
                .unwrap_or_default(),
        })
        .collect()
}

/// Plain-text page used by the CLI
pub fn render_text(gateway: &GatewayState, interfaces: &InterfaceStatusList) -> String {
    let mut out = gateway_text(gateway);
    out.push('\n');
    for row in interface_rows(interfaces) {
        out.push_str("  ");
        out.push_str(&row.label());
        out.push('\n');
    }
    out
}

#[derive(Template)]
#[template(path = "status.html")]
struct StatusPageTemplate {
    gateway_text: String,
    rows: Vec<InterfaceRow>,
    refresh_secs: u64,
}

/// Full HTML status page
pub fn render_page(
    gateway: &GatewayState,
    interfaces: &InterfaceStatusList,
    refresh_secs: u64,
) -> Result<String, askama::Error> {
    StatusPageTemplate {
        gateway_text: gateway_text(gateway),
        rows: interface_rows(interfaces),
        refresh_secs,
    }
    .render()
}
