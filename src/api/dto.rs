//! Request and response bodies.
//!
//! Records themselves are served straight from `db::models`; the terminal
//! response is `core::CommandResponse`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::MessageInput;

/// Body of `POST /execute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub command: String,
}

/// Body of `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MessageRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub content: String,
}

impl From<MessageRequest> for MessageInput {
    fn from(req: MessageRequest) -> Self {
        MessageInput {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            content: req.content,
        }
    }
}

/// Reply to an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAccepted {
    pub message: String,
}

/// Reply to `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy".
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
    pub uptime_seconds: i64,
}

/// Record store health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub pool_size: u32,
    pub idle_connections: usize,
}
