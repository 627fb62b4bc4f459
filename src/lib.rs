/// portfolio-terminal library
///
/// Backend for a terminal-style portfolio site: a command interpreter over a
/// small read-only record store, served over HTTP.

pub mod api;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::AppConfig;
pub use db::Database;
pub use error::{PortfolioError, Result};
