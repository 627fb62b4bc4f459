//! Application state shared across handlers.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::core::{CommandInterpreter, RecordStore, TerminalProfile};
use crate::db::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<Database>,
    /// Read-only view of the portfolio records.
    pub store: RecordStore,
    /// Terminal command interpreter.
    pub interpreter: Arc<CommandInterpreter>,
    /// When this state was built, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(db: Arc<Database>, profile: TerminalProfile) -> Self {
        let store = RecordStore::new(Arc::clone(&db));
        let interpreter = Arc::new(CommandInterpreter::new(store.clone(), profile));

        info!(database = %db.path().display(), "Application state initialized");

        Self {
            db,
            store,
            interpreter,
            started_at: Utc::now(),
        }
    }

    /// Seconds since the state was built.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}
