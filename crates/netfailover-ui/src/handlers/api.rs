//! JSON API handlers

use crate::AppState;
use axum::{Json, extract::State};
use netfailover_core::InterfaceStatusEntry;
use serde::{Deserialize, Serialize};

/// Snapshot of both regions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub default_gw: Option<String>,
    pub interfaces: Vec<InterfaceStatusEntry>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn state_snapshot(State(state): State<AppState>) -> Json<StateSnapshot> {
    Json(StateSnapshot {
        default_gw: state.console.gateway.state().default_gateway,
        interfaces: state.console.interfaces.list().entries().to_vec(),
    })
}

/// Liveness probe handler
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
