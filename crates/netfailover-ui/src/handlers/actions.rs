//! Operator action handlers

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use netfailover_core::Error;
use tracing::debug;

/// Run the "Set Default" action of the row at `row`, then return to the page
///
/// A failed override is not reported to the operator; the page simply keeps
/// showing the previous gateway.
pub async fn set_default(State(state): State<AppState>, Path(row): Path<usize>) -> Response {
    match state.console.action.activate(row).await {
        Ok(outcome) => {
            debug!(
                "Override for {} completed: {:?}",
                outcome.interface, outcome.completion
            );
        }
        Err(Error::RowNotFound(row)) => {
            return (StatusCode::NOT_FOUND, format!("No interface row {}", row)).into_response();
        }
        Err(e) => {
            debug!("Override request failed: {}", e);
        }
    }

    Redirect::to("/").into_response()
}
