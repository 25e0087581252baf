//! Server lifecycle.

use crate::{BookStudio, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use storyloom_error::{ServerError, ServerErrorKind, StoryloomResult};
use storyloom_interface::{ImageSynthesis, TextCompletion};
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Bind `addr` and serve the studio until Ctrl-C.
///
/// # Errors
///
/// Fails if the address cannot be bound or the server stops with an I/O
/// error.
#[instrument(skip(studio))]
pub async fn serve<T, I>(studio: Arc<BookStudio<T, I>>, addr: SocketAddr) -> StoryloomResult<()>
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })
    })?;
    serve_listener(studio, listener).await
}

/// Serve the studio on an already bound listener until Ctrl-C.
pub async fn serve_listener<T, I>(
    studio: Arc<BookStudio<T, I>>,
    listener: TcpListener,
) -> StoryloomResult<()>
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    let local = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!(addr = %local, "Storyloom listening");

    axum::serve(listener, create_router(studio))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Storyloom stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
