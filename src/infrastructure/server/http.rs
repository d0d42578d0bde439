//! HTTP listener with graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::ServerSection;
use crate::shared::ShutdownSignal;

/// Listener component of the lifecycle.
///
/// [`start`](Self::start) binds and begins serving; [`stop`](Self::stop)
/// stops accepting, lets in-flight requests finish (bounded by
/// `shutdown_timeout`) and returns once the serve task has ended.
pub struct HttpServer {
    local_addr: SocketAddr,
    shutdown: ShutdownSignal,
    shutdown_timeout: Duration,
    task: JoinHandle<()>,
}

impl HttpServer {
    /// Bind `config.address()` and spawn the serve loop.
    ///
    /// Errors after this returns are logged by the serve task, not
    /// propagated.
    pub async fn start(
        router: Router,
        config: &ServerSection,
        shutdown: ShutdownSignal,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind(config.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);

        let signal = shutdown.clone();
        let server = axum::serve(listener, router).with_graceful_shutdown(async move {
            signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let task = tokio::spawn(async move {
            if let Err(e) = server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            local_addr,
            shutdown,
            shutdown_timeout: Duration::from_secs(config.shutdown_timeout),
            task,
        })
    }

    /// Address actually bound, useful when the configured port is `0`.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn stop(self) {
        self.shutdown.trigger();

        let mut task = self.task;
        match tokio::time::timeout(self.shutdown_timeout, &mut task).await {
            Ok(Ok(())) => info!("REST API server stopped"),
            Ok(Err(e)) => error!("REST API server task panicked: {}", e),
            Err(_) => {
                warn!(
                    "REST API server did not drain within {:?}, aborting",
                    self.shutdown_timeout
                );
                task.abort();
            }
        }
    }
}
