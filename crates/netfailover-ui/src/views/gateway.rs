//! Default gateway region

use crate::ordering::{Completion, Region, ResponseOrdering};
use crate::render;
use netfailover_core::{FailoverBackend, GatewayState, Result};
use std::sync::Arc;
use tracing::debug;

/// Keeps the "Default Gateway" line in sync with the backend
///
/// Both the poll path (`refresh_default_gateway`) and the override path
/// (`set_default_gateway`) write the same region, so whichever successful
/// response is applied last is what the page shows.
#[derive(Clone)]
pub struct GatewayView {
    backend: Arc<dyn FailoverBackend>,
    region: Arc<Region<GatewayState>>,
}

impl GatewayView {
    pub fn new(backend: Arc<dyn FailoverBackend>, ordering: ResponseOrdering) -> Self {
        Self {
            backend,
            region: Arc::new(Region::new(GatewayState::default(), ordering)),
        }
    }

    /// Fetch the active gateway and overwrite the region on success
    ///
    /// On failure the region is left untouched.
    pub async fn refresh_default_gateway(&self) -> Result<Completion> {
        let ticket = self.region.issue();
        let response = self.backend.get_default_gw().await?;
        let completion = self.region.apply(ticket, GatewayState::from(response));
        debug!("Default gateway refresh {:?}: {}", completion, self.text());
        Ok(completion)
    }

    /// Force `interface_name` to be the default gateway and show the result
    /// without waiting for the next poll
    pub async fn set_default_gateway(&self, interface_name: &str) -> Result<Completion> {
        let ticket = self.region.issue();
        let response = self.backend.set_default_gw(interface_name).await?;
        let completion = self.region.apply(ticket, GatewayState::from(response));
        debug!(
            "Default gateway override to {} {:?}: {}",
            interface_name,
            completion,
            self.text()
        );
        Ok(completion)
    }

    pub fn state(&self) -> GatewayState {
        self.region.snapshot()
    }

    /// Rendered text of the region
    pub fn text(&self) -> String {
        self.region.read(render::gateway_text)
    }
}
