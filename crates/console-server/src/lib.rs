//! Site replication console API server.
//!
//! # Architecture
//!
//! - **Routes**: HTTP endpoint definitions under `/api/v1` and `/internal`
//! - **Handlers**: extract requests and turn results into responses
//! - **Services**: [`SiteReplicationService`], which drives the admin port
//! - **Models**: JSON request and response bodies of the console API
//!
//! The server does not know how to reach the admin service itself; callers
//! hand it an `Arc<dyn SiteReplicationAdmin>`.

#![warn(clippy::all)]

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use services::SiteReplicationService;
pub use state::AppState;

use anyhow::Context;
use axum::Router;
use console_admin::SiteReplicationAdmin;
use console_common_config::{ConfigLoader, ConsoleConfig, Environment};
use console_common_log::LogConfig;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Load `.env` files and the config file, then install logging.
///
/// Logging settings come from the file, overridden by `CONSOLE_LOG_*`.
pub fn bootstrap(config_path: Option<&Path>) -> anyhow::Result<ConsoleConfig> {
    let _env = Environment::init();

    let loader = match config_path {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::default(),
    };
    let config = loader
        .load()
        .with_context(|| format!("failed to load {}", loader.path().display()))?;

    let log_config = LogConfig::from(&config.logging).with_env_overrides();
    console_common_log::init(log_config).context("failed to initialize logging")?;

    Ok(config)
}

/// The console API server.
pub struct Server {
    config: ConsoleConfig,
    state: AppState,
}

impl Server {
    /// Create a server that serves site replication calls through `admin`.
    pub fn new(config: ConsoleConfig, admin: Arc<dyn SiteReplicationAdmin>) -> Self {
        let state = AppState::new(admin, &config);
        Self { config, state }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone())
    }

    /// Bind to the configured address and serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(
            addr = %listener.local_addr()?,
            admin_endpoint = %self.config.admin.endpoint,
            "console server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")?;

        info!("console server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, starting graceful shutdown");
}
