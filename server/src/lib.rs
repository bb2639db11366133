//! Trainspotter proxy server
//!
//! Sits between the display and the BART API so the API key never leaves the
//! host. Answers any `GET` with a compact destination → minutes map.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

/// API module
pub mod api;

/// BART upstream client
pub mod bart;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Wire report
pub mod report;

pub use api::{AppState, build_router};
pub use bart::{BartClient, DepartureSource};
pub use config::{ServerConfig, UpstreamConfig};
pub use error::{ServerError, ServerResult, UpstreamError};
pub use report::{DestinationEtas, EtdReport};

/// Bind and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let addr = config.socket_addr()?;
    info!(
        station = %config.upstream.station,
        direction = ?config.upstream.direction,
        "Starting Trainspotter server"
    );

    let source: Arc<dyn DepartureSource> = Arc::new(BartClient::new(config.upstream)?);
    let app = build_router(AppState::new(source));

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
}
