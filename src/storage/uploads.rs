// src/storage/uploads.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::grading::StudentUpload;
use crate::utils::error::StorageError;

const DOCUMENT_EXTENSION: &str = "docx";

/// Expands the student inputs into document paths, keeping the given order.
/// A directory contributes its `.docx` files sorted by name; Word lock files
/// (`~$...`) are skipped.
pub fn collect_document_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, StorageError> {
    let mut paths = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            paths.push(input.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = fs::read_dir(input)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_student_document(path))
            .collect();
        found.sort();

        tracing::debug!("Found {} documents in {}", found.len(), input.display());
        paths.extend(found);
    }

    Ok(paths)
}

fn is_student_document(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    let is_lock_file = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("~$"));
    has_extension && !is_lock_file
}

/// File name shown for a document (the path's last component).
pub fn display_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads one document from disk.
pub async fn read_document(path: &Path) -> Result<Vec<u8>, StorageError> {
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Reads every student document, in order.
pub async fn read_uploads(paths: &[PathBuf]) -> Result<Vec<StudentUpload>, StorageError> {
    let mut uploads = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = read_document(path).await?;
        uploads.push(StudentUpload::new(display_filename(path), bytes));
    }
    Ok(uploads)
}
