//! Interface status region

use crate::ordering::{Completion, Region, ResponseOrdering};
use crate::render::{self, InterfaceRow};
use netfailover_core::{FailoverBackend, InterfaceStatusEntry, InterfaceStatusList, Result};
use std::sync::Arc;
use tracing::debug;

/// Renders the interface table and resolves rows for the override action
#[derive(Clone)]
pub struct InterfaceStatusView {
    backend: Arc<dyn FailoverBackend>,
    region: Arc<Region<InterfaceStatusList>>,
}

impl InterfaceStatusView {
    pub fn new(backend: Arc<dyn FailoverBackend>, ordering: ResponseOrdering) -> Self {
        Self {
            backend,
            region: Arc::new(Region::new(InterfaceStatusList::default(), ordering)),
        }
    }

    /// Fetch all interface statuses and rebuild the table on success
    ///
    /// Every prior row is discarded; rows are rebuilt in response order.
    /// On failure the previous rows stay as they were.
    pub async fn refresh_interface_status(&self) -> Result<Completion> {
        let ticket = self.region.issue();
        let response = self.backend.get_interface_status().await?;
        let list = InterfaceStatusList::from(response);
        let count = list.len();
        let completion = self.region.apply(ticket, list);
        debug!("Interface status refresh {:?}: {} rows", completion, count);
        Ok(completion)
    }

    /// Entry occupying `row` right now
    pub fn entry_at(&self, row: usize) -> Option<InterfaceStatusEntry> {
        self.region.read(|list| list.get(row).cloned())
    }

    pub fn list(&self) -> InterfaceStatusList {
        self.region.snapshot()
    }

    pub fn rows(&self) -> Vec<InterfaceRow> {
        self.region.read(render::interface_rows)
    }
}
