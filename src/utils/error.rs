// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Not a valid document container: {0}")]
    Container(#[from] zip::result::ZipError), // Bad or truncated ZIP archive

    #[error("Document part not found: {0}")]
    MissingPart(String), // e.g. word/document.xml absent

    #[error("Could not read document part {part}: {source}")]
    PartRead {
        part: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Unexpected document structure: {0}")]
    Structure(String),
}

#[derive(Error, Debug)]
pub enum GradingError {
    #[error("The answer key is empty; no answers were found in the key document")]
    EmptyKey,

    #[error("No student documents were provided")]
    NoSubmissions,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    WorkbookError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read key document {path}: {source}")]
    KeyDocument {
        path: String,
        #[source]
        source: DocumentError,
    },

    #[error("Grading refused: {0}")]
    Grading(#[from] GradingError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
