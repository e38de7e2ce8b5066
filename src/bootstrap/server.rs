use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::app::AppConfig;

pub async fn init_server(config: &AppConfig) -> anyhow::Result<()> {
    let listener = bind(config.port).await?;

    // Build the router
    let app = crate::routes::routes();

    serve(listener, app).await
}

/// Bind the listener on all interfaces.
///
/// A bind failure (for example the port is already in use) is returned
/// to the caller instead of crashing here, so `main` decides that it is
/// fatal.
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| anyhow::anyhow!("cannot bind `{}`: {}", addr, err))?;

    tracing::info!("listening on port {}", listener.local_addr()?.port());

    Ok(listener)
}

/// Run the server until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");

    tracing::info!("shutdown signal received");
}
