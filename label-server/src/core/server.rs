//! Server implementation
//!
//! HTTP server startup and shutdown

use std::net::SocketAddr;

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = ServerState::new(self.config.clone());
        let app = api::build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("🚀 Listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("✅ Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
