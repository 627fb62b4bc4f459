//! HTTP surface for the terminal frontend.
//!
//! Thin axum handlers over the command interpreter and the record store.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
