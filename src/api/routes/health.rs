//! Health check and root endpoints.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::warn;

use crate::api::dto::{DatabaseHealth, HealthResponse, RootResponse};
use crate::api::state::AppState;

pub const ROOT_MESSAGE: &str = "Portfolio Terminal API is running";

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// 200 while the record store answers a ping, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Health check failed to reach the database");
            false
        }
    };

    let (status, http_status) = if db_healthy {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    let pool = state.db.pool();

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: DatabaseHealth {
                connected: db_healthy,
                pool_size: pool.size(),
                idle_connections: pool.num_idle(),
            },
            uptime_seconds: state.uptime_seconds(),
        }),
    )
}
