//! API server implementation.

use axum::{middleware, Router};
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::middleware::{cors_layer, request_id, request_logging};
use crate::api::routes;
use crate::api::state::AppState;
use crate::config::ServerConfig;
use crate::error::{PortfolioError, Result};

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Address to bind to.
    pub bind_address: SocketAddr,
    /// Allowed browser origins; `"*"` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], server.port)),
            cors_origins: server.cors_origins,
        }
    }
}

impl TryFrom<&ServerConfig> for ApiServerConfig {
    type Error = PortfolioError;

    fn try_from(config: &ServerConfig) -> Result<Self> {
        let address = format!("{}:{}", config.host, config.port);
        let bind_address = address
            .to_socket_addrs()
            .map_err(|e| {
                PortfolioError::Config(format!("invalid bind address '{}': {}", address, e))
            })?
            .next()
            .ok_or_else(|| {
                PortfolioError::Config(format!("'{}' resolved to no address", address))
            })?;

        Ok(Self {
            bind_address,
            cors_origins: config.cors_origins.clone(),
        })
    }
}

/// API server.
pub struct ApiServer {
    config: ApiServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Creates a new API server.
    pub fn new(state: AppState, config: ApiServerConfig) -> Self {
        Self { config, state }
    }

    /// Builds the router with the middleware stack applied.
    pub fn router(&self) -> Router {
        if self.config.cors_origins.is_empty() {
            warn!("No CORS origins configured; browsers on other origins will be refused");
        }

        // Innermost first
        routes::create_router(self.state.clone())
            .layer(middleware::from_fn(request_logging))
            .layer(middleware::from_fn(request_id))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&self.config.cors_origins))
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Runs the server with a custom shutdown signal.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let addr = self.config.bind_address;

        info!("Starting API server on {}", addr);

        let listener = TcpListener::bind(addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("API server shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalProfile;
    use crate::db::Database;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_router_creation() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let state = AppState::new(db, TerminalProfile::default());

        let server = ApiServer::new(state, ApiServerConfig::default());
        let _router = server.router();
    }

    #[test]
    fn test_config_from_server_settings() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_origins: vec!["*".to_string()],
        };

        let config = ApiServerConfig::try_from(&server).unwrap();
        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }
}
