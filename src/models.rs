//! Data models for the quicknote application.
//!
//! Notes are the only persisted entity. Uploaded images are plain files on
//! disk, referenced from note text by their public path.

use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Note Type
// ============================================================================

/// A stored note. `content` holds rendered, sanitized HTML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    /// Monotonic sequence number issued by the store; orders the note list.
    pub seq: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Form Submission
// ============================================================================

/// Submit button values the index form sends.
pub const SAVE_ACTION: &str = "Save";
pub const UPLOAD_ACTION: &str = "Upload";

/// A file part from the compose form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// The decoded `POST /note` body.
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub text_content: String,
    pub image: Option<UploadedFile>,
    pub save: Option<String>,
    pub upload: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Upload,
    None,
}

impl NoteForm {
    /// Which button was pressed. Save wins if a client sends both.
    pub fn action(&self) -> FormAction {
        if self.save.as_deref() == Some(SAVE_ACTION) {
            FormAction::Save
        } else if self.upload.as_deref() == Some(UPLOAD_ACTION) {
            FormAction::Upload
        } else {
            FormAction::None
        }
    }

    /// The attached image, if the browser sent one with a real filename.
    /// An empty file input still produces a part with an empty filename.
    pub fn attachment(&self) -> Option<&UploadedFile> {
        self.image.as_ref().filter(|f| !f.file_name.is_empty())
    }
}
