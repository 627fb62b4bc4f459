//! Contact form submissions.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::info;
use validator::Validate;

use crate::api::dto::{MessageAccepted, MessageRequest};
use crate::api::error::ApiError;
use crate::api::state::AppState;

pub const MESSAGE_ACCEPTED: &str = "Message sent successfully!";

/// Creates message routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/messages", post(send_message))
}

async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageAccepted>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let id = state.db.save_message(request.into()).await?;
    info!(message_id = id, "Message received");

    Ok((
        StatusCode::CREATED,
        Json(MessageAccepted {
            message: MESSAGE_ACCEPTED.to_string(),
        }),
    ))
}
