// src/extractors/key.rs
use crate::document::DocumentView;
use crate::grading::types::{AnswerKey, AnswerLetter};

/// Reads the answer key from the key document's tables.
///
/// Cells are visited table by table, row by row; every cell whose trimmed
/// text is a single choice letter contributes one answer. Traversal stops as
/// soon as `key_size` letters are collected. A document with fewer valid
/// cells yields a short key rather than an error.
pub fn extract_key(doc: &impl DocumentView, key_size: usize) -> AnswerKey {
    let letters: Vec<AnswerLetter> = doc
        .table_cells()
        .filter_map(AnswerLetter::from_cell)
        .take(key_size)
        .collect();

    tracing::debug!("Extracted {} key letters (wanted {})", letters.len(), key_size);
    AnswerKey::new(letters)
}
