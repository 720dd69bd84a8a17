//! Quicknote server entry point.
//!
//! Loads configuration, opens the note database, and serves the web UI.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use quicknote::{app, logging, AppState, Config, SledNoteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::load().context("failed to load configuration")?;

    let store = SledNoteStore::open(&config.db_path)
        .with_context(|| format!("failed to open note database at {}", config.db_path.display()))?;

    // Uploads create the directory on demand as well
    if let Err(e) = std::fs::create_dir_all(&config.upload_dir) {
        warn!(upload_dir = %config.upload_dir.display(), error = %e, "cannot create upload directory");
    }

    let state = Arc::new(AppState::new(Arc::new(store), config.upload_dir.clone()));
    let router = app(state, &config);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!(
        addr = %addr,
        upload_dir = %config.upload_dir.display(),
        db_path = %config.db_path.display(),
        "quicknote server running"
    );

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
