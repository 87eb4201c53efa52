use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use self::error::ApiError;
pub use self::routes::router;
pub use self::state::AppState;

/// Bind `addr` and serve until `cancel` fires
pub async fn serve(addr: &str, state: AppState, cancel: CancellationToken) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Running on: {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("server exited with error")?;

    tracing::info!("Server stopped");
    Ok(())
}
