// src/document/mod.rs
pub mod docx;
pub mod model;

#[cfg(test)]
pub mod fixtures;

// Re-export the document model for convenience
#[allow(unused_imports)]
pub use model::{Document, DocumentView, Paragraph, StyledTextRun, Table};
