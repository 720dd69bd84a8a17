//! Quicknote library - a minimal Markdown note server.
//!
//! Notes are written in a single compose form, rendered from Markdown to
//! sanitized HTML, and listed newest first. Images can be uploaded into the
//! compose text and are served back from `/uploads`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Response, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    services::{fs::ServeFileSystemResponseBody, ServeDir},
    set_header::SetResponseHeader,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod store;
pub mod templates;
pub mod uploads;

/// Browsers and proxies may cache uploaded files for an hour.
pub const UPLOADS_CACHE_CONTROL: &str = "public, max-age=3600";

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub store: Arc<dyn store::NoteStore>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn store::NoteStore>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            upload_dir: upload_dir.into(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    let uploads = SetResponseHeader::overriding(
        ServeDir::new(&state.upload_dir),
        header::CACHE_CONTROL,
        upload_cache_control,
    );

    Router::new()
        .route("/", get(handlers::index))
        .route("/note", post(handlers::submit_note))
        .nest_service(uploads::UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Only files actually served (or revalidated) are cacheable; a 404 for a
/// name that may be uploaded later is not.
fn upload_cache_control(
    response: &Response<ServeFileSystemResponseBody>,
) -> Option<HeaderValue> {
    let status = response.status();
    (status.is_success() || status == StatusCode::NOT_MODIFIED)
        .then(|| HeaderValue::from_static(UPLOADS_CACHE_CONTROL))
}

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use markdown::{html_escape, prepare_content, render_markdown};
pub use models::{FormAction, Note, NoteForm, UploadedFile};
pub use store::{recent, NoteStore, SledNoteStore};
pub use uploads::{append_image_reference, store_upload, upload_extension};
