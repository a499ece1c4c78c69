//! Status page handler

use crate::{AppState, render};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

pub async fn status_page(State(state): State<AppState>) -> Response {
    let gateway = state.console.gateway.state();
    let interfaces = state.console.interfaces.list();

    match render::render_page(&gateway, &interfaces, state.config.page_refresh_secs) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render status page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
