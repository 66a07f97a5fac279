// src/grading/scorer.rs
use serde::Serialize;

use crate::grading::types::{AnswerKey, AnswerLetter};
use crate::utils::error::GradingError;

/// Upper bound of the normalized grade scale.
pub const GRADE_SCALE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub normalized: f64,
}

/// Compares answers to the key position by position and scales the hit count
/// to 0-20, rounded to two decimals. Answers beyond the key (or a key longer
/// than the answers) are ignored.
pub fn score(answers: &[AnswerLetter], key: &AnswerKey) -> Result<Score, GradingError> {
    if key.is_empty() {
        return Err(GradingError::EmptyKey);
    }

    let correct = answers
        .iter()
        .zip(key.letters())
        .filter(|(given, expected)| given.as_char().eq_ignore_ascii_case(&expected.as_char()))
        .count();
    let total = key.len();
    let normalized = round_to_hundredths(correct as f64 / total as f64 * GRADE_SCALE);

    Ok(Score { correct, total, normalized })
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
