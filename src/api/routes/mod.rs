//! API routes.

pub mod health;
pub mod messages;
pub mod records;
pub mod terminal;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use axum::{http::Uri, Router};

/// Creates the main API router.
///
/// Every route answers both at the root and under `/api`, so the frontend
/// works whether or not a proxy strips the prefix.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(api_routes())
        .fallback(not_found)
        .with_state(state)
}

/// JSON 404 in the same shape as every other error.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(terminal::routes())
        .merge(records::routes())
        .merge(messages::routes())
}
