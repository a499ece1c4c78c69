//! Net Failover Manager status console
//!
//! Polls the failover backend for the active default gateway and the status
//! of every interface, keeps that state per view, and serves it as an HTML
//! page from which an operator can force any interface to be the default
//! gateway. Templates and CSS are compiled into the binary.

pub mod action;
pub mod handlers;
pub mod ordering;
pub mod poller;
pub mod render;
pub mod server;
pub mod views;

pub use action::{OverrideAction, OverrideOutcome};
pub use ordering::{Completion, ResponseOrdering};
pub use poller::{PollConfig, Poller, PollerHandles};
pub use server::{UiConfig, UiServer};
pub use views::{GatewayView, InterfaceStatusView};

use netfailover_core::FailoverBackend;
use std::sync::Arc;

/// Both views plus the action that connects them
#[derive(Clone)]
pub struct Console {
    pub gateway: GatewayView,
    pub interfaces: InterfaceStatusView,
    pub action: OverrideAction,
}

impl Console {
    pub fn new(backend: Arc<dyn FailoverBackend>, ordering: ResponseOrdering) -> Self {
        let gateway = GatewayView::new(Arc::clone(&backend), ordering);
        let interfaces = InterfaceStatusView::new(backend, ordering);
        let action = OverrideAction::new(interfaces.clone(), gateway.clone());
        Self {
            gateway,
            interfaces,
            action,
        }
    }

    /// Poller driving this console's views
    pub fn poller(&self, config: &PollConfig) -> Poller {
        Poller::new(self.gateway.clone(), self.interfaces.clone(), config)
    }

    /// Text rendering of both regions
    pub fn render_text(&self) -> String {
        render::render_text(&self.gateway.state(), &self.interfaces.list())
    }
}

/// Shared application state for the UI server
#[derive(Clone)]
pub struct AppState {
    pub console: Console,
    pub config: UiConfig,
}
