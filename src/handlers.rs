//! HTTP route handlers.
//!
//! `GET /` renders the compose form and every note, newest first.
//! `POST /note` is the single form endpoint; the submit button that was
//! pressed decides between saving the note and attaching an image.

use crate::error::{Error, Result};
use crate::markdown::prepare_content;
use crate::models::{FormAction, NoteForm, UploadedFile};
use crate::store::recent;
use crate::templates::index_page;
use crate::uploads::{append_image_reference, store_upload};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_index(&state, "")
}

fn render_index(state: &AppState, compose_text: &str) -> Result<Html<String>> {
    let notes = recent(state.store.as_ref())?;
    Ok(Html(index_page(&notes, compose_text)))
}

// ============================================================================
// Note Form Handler
// ============================================================================

pub async fn submit_note(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response> {
    let form = read_note_form(multipart).await?;

    match form.action() {
        FormAction::Save => {
            match prepare_content(&form.text_content) {
                Some(content) => {
                    let note = state.store.save(&content)?;
                    info!(id = %note.id, seq = note.seq, "note saved");
                }
                None => debug!("blank note ignored"),
            }
            Ok(Redirect::to("/").into_response())
        }
        FormAction::Upload => {
            let text = match form.attachment() {
                Some(file) => {
                    let reference =
                        store_upload(&state.upload_dir, &file.file_name, &file.bytes).await?;
                    append_image_reference(&form.text_content, &reference)
                }
                None => {
                    debug!("upload pressed without a file");
                    form.text_content.clone()
                }
            };
            Ok(render_index(&state, &text)?.into_response())
        }
        FormAction::None => Ok(render_index(&state, &form.text_content)?.into_response()),
    }
}

/// Decode the compose form. `textContent` is required; every other part is
/// optional and unknown parts are skipped.
async fn read_note_form(mut multipart: Multipart) -> Result<NoteForm> {
    let mut form = NoteForm::default();
    let mut saw_text = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "textContent" => {
                form.text_content = field.text().await?;
                saw_text = true;
            }
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.image = Some(UploadedFile { file_name, bytes });
            }
            "save" => form.save = Some(field.text().await?),
            "upload" => form.upload = Some(field.text().await?),
            _ => {}
        }
    }

    if !saw_text {
        return Err(Error::InvalidForm("missing textContent field".to_string()));
    }

    Ok(form)
}
