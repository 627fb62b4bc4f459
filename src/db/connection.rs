/// Database connection management with connection pooling
///
/// Provides a thread-safe connection pool to the SQLite record store.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Default number of database connections in the pool
pub const MAX_CONNECTIONS: u32 = 5;

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = include_str!("../../database/schema.sql");

/// Split a SQL script into single statements.
///
/// SQLite won't run several statements in one execute. `--` comment lines
/// are dropped first so a `;` inside a comment can't split a statement.
fn schema_statements(sql: &str) -> Vec<String> {
    let uncommented = sql
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    uncommented
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(String::from)
        .collect()
}

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (or create) the database file at `db_path`
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Successfully created database instance
    /// * `Err(PortfolioError)` - If connection fails
    ///
    /// # Examples
    /// ```no_run
    /// use portfolio_terminal_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("/var/lib/portfolio/portfolio.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::with_max_connections(db_path, MAX_CONNECTIONS).await
    }

    /// Same as [`Database::new`] with an explicit pool size
    pub async fn with_max_connections<P: AsRef<Path>>(
        db_path: P,
        max_connections: u32,
    ) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if db_path.as_os_str() == IN_MEMORY {
            return Self::in_memory().await;
        }

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        db.initialize_schema().await?;

        info!(path = %db.db_path.display(), "Record store opened");

        Ok(db)
    }

    /// Create a private database in memory
    ///
    /// Every `:memory:` connection is its own database, so the pool is pinned
    /// to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(IN_MEMORY),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create a test database in memory
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        Self::in_memory().await
    }

    /// Initialize database schema
    ///
    /// Creates all required tables and indexes if they don't exist.
    async fn initialize_schema(&self) -> Result<()> {
        for statement in schema_statements(SCHEMA) {
            sqlx::query(&statement).execute(self.pool.as_ref()).await?;
        }

        debug!("Schema initialized");

        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close all connections in the pool
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Round-trip a trivial query to check the store is reachable
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Get database statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (projects,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM project")
            .fetch_one(self.pool.as_ref())
            .await?;

        let (skills,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skill")
            .fetch_one(self.pool.as_ref())
            .await?;

        let (contacts,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact")
            .fetch_one(self.pool.as_ref())
            .await?;

        let (experience,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM experience")
            .fetch_one(self.pool.as_ref())
            .await?;

        let (messages,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM message")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(DatabaseStats {
            total_projects: projects,
            total_skills: skills,
            total_contacts: contacts,
            total_experience: experience,
            total_messages: messages,
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_projects: i64,
    pub total_skills: i64,
    pub total_contacts: i64,
    pub total_experience: i64,
    pub total_messages: i64,
    pub pool_size: u32,
    pub idle_connections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::new_test().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_database_stats() {
        let db = Database::new_test().await.unwrap();
        let stats = db.stats().await.unwrap();

        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.total_skills, 0);
        assert_eq!(stats.total_contacts, 0);
        assert_eq!(stats.total_experience, 0);
        assert_eq!(stats.total_messages, 0);
    }

    #[tokio::test]
    async fn test_database_pool() {
        let db = Database::new_test().await.unwrap();
        assert_eq!(db.pool().size(), 1);
        assert_eq!(db.path(), Path::new(IN_MEMORY));
    }

    #[tokio::test]
    async fn test_schema_initialization() {
        let db = Database::new_test().await.unwrap();

        for table in ["project", "skill", "contact", "experience", "message"] {
            let result: std::result::Result<(i64,), sqlx::Error> =
                sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                    .fetch_one(db.pool())
                    .await;
            assert!(result.is_ok(), "table {} should exist", table);
        }
    }

    #[test]
    fn test_schema_statements_ignore_comments() {
        let statements = schema_statements(
            "-- header; with a semicolon\nCREATE TABLE a (x INTEGER);\n  -- trailing; note\nCREATE TABLE b (y TEXT)",
        );

        assert_eq!(
            statements,
            vec!["CREATE TABLE a (x INTEGER)", "CREATE TABLE b (y TEXT)"]
        );
    }

    #[tokio::test]
    async fn test_shipped_schema_applies_cleanly() {
        let statements = schema_statements(SCHEMA);
        assert!(statements.iter().all(|s| !s.starts_with("--")));

        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        for statement in &statements {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .unwrap_or_else(|e| panic!("statement failed: {}\n{}", e, statement));
        }

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('project', 'skill', 'contact', 'experience', 'message')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 5);
    }

    #[tokio::test]
    async fn test_file_database_reopens_with_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("portfolio.db");

        let db = Database::new(&path).await.unwrap();
        db.close().await;

        // Schema statements are idempotent
        let db = Database::new(&path).await.unwrap();
        assert!(db.ping().await.is_ok());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_ping_fails_after_close() {
        let db = Database::new_test().await.unwrap();
        db.close().await;
        assert!(db.ping().await.is_err());
    }
}
