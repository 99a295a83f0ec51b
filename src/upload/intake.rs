//! Turning dropped or picked files into [`FileCandidate`]s.
//!
//! Only the name and byte size are taken; contents are never read.

use super::types::FileCandidate;
use crate::error::AppError;
use eframe::egui::DroppedFile;
use std::fs;
use std::path::Path;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["pdf", "jpg", "jpeg", "png", "gif", "eml", "msg"];

/// Shown next to the drop zone. Not enforced.
pub const ADVERTISED_MAX_BYTES: u64 = 10 * 1024 * 1024;

pub fn from_path(path: &Path) -> Result<FileCandidate, AppError> {
    let metadata = fs::metadata(path).map_err(|source| AppError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(FileCandidate::new(name, metadata.len()))
}

pub fn from_dropped(file: &DroppedFile) -> Result<FileCandidate, AppError> {
    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            file.path
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        } else {
            file.name.clone()
        };
        return Ok(FileCandidate::new(name, bytes.len() as u64));
    }

    match &file.path {
        Some(path) => from_path(path),
        None => Err(AppError::UnsizedDrop(file.name.clone())),
    }
}
