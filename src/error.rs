/// Error types for portfolio-terminal
///
/// This module defines all possible errors that can occur in the library.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for portfolio-terminal operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Database-related errors (unreachable store, failed query)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed fixture could not be parsed
    #[error("Seed file parse error: {0}")]
    SeedParse(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record breaks one of the data-model invariants
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type alias for portfolio-terminal operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Convert PortfolioError to a user-friendly error message
impl PortfolioError {
    pub fn user_message(&self) -> String {
        match self {
            PortfolioError::Database(e) => {
                format!("Database error occurred. Is the database reachable? Details: {}", e)
            }
            PortfolioError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            PortfolioError::SeedParse(e) => {
                format!("Seed file is not valid TOML: {}", e)
            }
            PortfolioError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            PortfolioError::InvalidRecord(reason) => {
                format!("Refusing to load record: {}", reason)
            }
        }
    }

    /// True when the error means the record store could not be read.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, PortfolioError::Database(_))
    }
}
