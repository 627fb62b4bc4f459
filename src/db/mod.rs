/// Database module for portfolio-terminal
///
/// Handles all database operations using SQLite and sqlx.
/// Implements connection pooling so concurrent requests can read in parallel.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
