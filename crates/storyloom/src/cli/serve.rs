//! `serve` command handler.

use super::backends::{image_backend, text_backend};
use std::net::SocketAddr;
use std::sync::Arc;
use storyloom_core::StoryloomConfig;
use storyloom_error::StoryloomResult;
use storyloom_server::{BookStudio, serve};

/// Handle the `serve` command
pub async fn handle_serve(config: StoryloomConfig, addr: SocketAddr) -> StoryloomResult<()> {
    tracing::info!("Starting book studio");

    let text = text_backend(&config).await?;
    let image = image_backend(&config).await?;
    let studio = Arc::new(BookStudio::new(Arc::new(config), text, image));

    tracing::info!("Open http://{} in a browser. Press Ctrl+C to stop.", addr);
    serve(studio, addr).await
}
