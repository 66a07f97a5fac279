// src/grading/mod.rs
pub mod batch;
pub mod scorer;
pub mod types;

#[allow(unused_imports)]
pub use batch::{load_key, GradeOutcome, GradingReport, GradingSession, StudentUpload};
#[allow(unused_imports)]
pub use types::{AnswerKey, AnswerLetter, GradeRow, KeyStatus, LoadedKey, StudentSubmission};

/// Question count of the grading form.
pub const DEFAULT_KEY_SIZE: usize = 10;

/// Settings the grading core needs from its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradingConfig {
    /// Number of key letters to collect before the key extractor stops.
    pub key_size: usize,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self { key_size: DEFAULT_KEY_SIZE }
    }
}
