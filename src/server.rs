//! Hotel booking server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the full server lifecycle:
//! storage pool, REST API listener and graceful shutdown. Components are
//! acquired in a fixed order and released in the reverse one.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::{DatabaseConfig, DatabasePool, HttpServer, SeaOrmRepositoryProvider};
use crate::interfaces::{create_api_router, ApiState};
use crate::shared::{listen_for_shutdown_signals, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
}

// ── Lifecycle ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to open database: {0}")]
    Storage(#[from] DbErr),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

fn transition(state: &watch::Sender<LifecycleState>, next: LifecycleState) {
    info!(state = ?next, "Lifecycle transition");
    state.send_replace(next);
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// # Examples
///
/// ```rust,no_run
/// use hotel_booking::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.stop().await?;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with.
    pub config: AppConfig,

    state: watch::Sender<LifecycleState>,
    shutdown: ShutdownSignal,
    http: HttpServer,
    db: DatabasePool,
}

impl ServerHandle {
    /// Start the service.
    ///
    /// This will:
    /// 1. Open the database pool (and create the schema if configured)
    /// 2. Wire repositories, services and the router
    /// 3. Bind the REST API listener
    ///
    /// A storage failure aborts before any listener is bound. A bind
    /// failure closes the pool again. Either way nothing stays open.
    pub async fn start(opts: ServerOptions) -> Result<Self, LifecycleError> {
        let config = opts.config;
        let (state, _) = watch::channel(LifecycleState::Stopped);

        info!("Starting hotel booking service...");
        transition(&state, LifecycleState::Starting);

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig::from(&config.database);
        let db = match DatabasePool::start(&db_config).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to open database: {}", e);
                transition(&state, LifecycleState::Stopped);
                return Err(LifecycleError::Storage(e));
            }
        };

        // ── Repositories, services & router ────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.connection().clone()));
        let router = create_api_router(
            ApiState::new(Arc::clone(&repos)),
            Duration::from_secs(config.server.request_timeout),
        );

        // ── REST API server ────────────────────────────────────
        let shutdown = ShutdownSignal::new();
        let http = match HttpServer::start(router, &config.server, shutdown.clone()).await {
            Ok(http) => http,
            Err(source) => {
                let addr = config.server.address();
                error!("Failed to bind {}: {}", addr, source);
                if let Err(e) = db.stop().await {
                    warn!("Error closing database connection: {}", e);
                }
                transition(&state, LifecycleState::Stopped);
                return Err(LifecycleError::Bind { addr, source });
            }
        };

        transition(&state, LifecycleState::Running);
        info!("🚀 Hotel booking service started.");

        Ok(Self {
            repos,
            config,
            state,
            shutdown,
            http,
            db,
        })
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Receiver of every later state change, including the final
    /// `Stopped` published by [`stop`](Self::stop).
    pub fn watch_state(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Address the REST API is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.http.local_addr()
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        tokio::spawn(listen_for_shutdown_signals(self.shutdown.clone()));
    }

    /// Stop the listener, then close the database pool.
    pub async fn stop(self) -> Result<(), LifecycleError> {
        info!("🛑 Shutting down hotel booking service...");
        transition(&self.state, LifecycleState::Stopping);

        self.http.stop().await;

        let result = self.db.stop().await.map_err(|e| {
            warn!("Error closing database connection: {}", e);
            LifecycleError::Storage(e)
        });

        transition(&self.state, LifecycleState::Stopped);
        info!("👋 Hotel booking service shutdown complete");
        result
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
