//! Terminal command endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::api::dto::ExecuteRequest;
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::core::CommandResponse;

/// Creates terminal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/execute", post(execute_command))
}

/// Run one command line and return what the terminal should print.
async fn execute_command(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Result<Json<CommandResponse>, ApiError> {
    let Json(request) = payload?;

    debug!(command = %request.command, "Executing terminal command");

    let response = state.interpreter.process(&request.command).await?;
    Ok(Json(response))
}
