//! HTTP listener and graceful shutdown.

use anyhow::Result;
use axum::Router;

use cardgen_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, OUTPUT_FORMAT};
use cardgen_core::Config;

/// Bind the listener and serve until a shutdown signal arrives.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        canvas_width = CANVAS_WIDTH,
        canvas_height = CANVAS_HEIGHT,
        output_format = OUTPUT_FORMAT,
        public_base_url = %config.public_base_url,
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves once SIGINT (Ctrl+C) or, on Unix, SIGTERM arrives.
///
/// # Panics
/// Panics if a signal handler cannot be installed, which leaves no safe way
/// to run the server.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.expect("Failed to install Ctrl+C handler");
            tracing::info!("Received Ctrl+C signal");
        }
        _ = sigterm => {
            tracing::info!("Received terminate signal");
        }
    }

    tracing::info!("Draining connections before shutdown");
}
