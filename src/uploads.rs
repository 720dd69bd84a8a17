//! Image uploads.
//!
//! Uploaded files are written under the upload directory with a random UUID
//! name, keeping only the original extension. The returned reference is the
//! public path served by the `/uploads` static route.

use std::path::Path;

use uuid::Uuid;

use crate::error::{Error, Result};

/// URL prefix the upload directory is served under.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Extension of a client-supplied filename: everything after the last dot of
/// its final path component. Empty when there is no dot or the suffix is not
/// plain ASCII alphanumerics.
pub fn upload_extension(original_name: &str) -> String {
    let base = original_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(original_name);

    match base.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_ascii_lowercase()
        }
        _ => String::new(),
    }
}

pub fn stored_file_name(id: &Uuid, ext: &str) -> String {
    if ext.is_empty() {
        id.to_string()
    } else {
        format!("{}.{}", id, ext)
    }
}

/// Copy an uploaded payload into `upload_dir` and return its public path.
pub async fn store_upload(upload_dir: &Path, original_name: &str, bytes: &[u8]) -> Result<String> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|source| Error::UploadDirUnavailable {
            path: upload_dir.to_path_buf(),
            source,
        })?;

    let file_name = stored_file_name(&Uuid::new_v4(), &upload_extension(original_name));
    tokio::fs::write(upload_dir.join(&file_name), bytes).await?;

    tracing::info!(
        original = original_name,
        stored = %file_name,
        size = bytes.len(),
        "upload stored"
    );

    Ok(format!("{}/{}", UPLOADS_ROUTE, file_name))
}

/// Append a markdown image reference to the text being composed.
pub fn append_image_reference(text: &str, reference: &str) -> String {
    format!("{} ![]({})", text, reference)
}
