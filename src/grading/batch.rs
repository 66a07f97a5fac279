// src/grading/batch.rs
use std::fmt;

use crate::document::{docx, DocumentView};
use crate::extractors::{extract_answers, extract_key, extract_name};
use crate::grading::scorer::score;
use crate::grading::types::{AnswerKey, GradeRow, KeyStatus, LoadedKey, StudentSubmission};
use crate::grading::GradingConfig;
use crate::utils::error::GradingError;

/// A student document as handed over by the caller.
#[derive(Debug, Clone)]
pub struct StudentUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl StudentUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { filename: filename.into(), bytes }
    }
}

/// Result of grading one upload. Unreadable documents are reported, never dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeOutcome {
    Graded { submission: StudentSubmission, row: GradeRow },
    Unreadable { filename: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradingReport {
    pub key: AnswerKey,
    pub outcomes: Vec<GradeOutcome>,
}

impl GradingReport {
    /// Rows of the graded documents, in upload order.
    pub fn rows(&self) -> impl Iterator<Item = &GradeRow> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            GradeOutcome::Graded { row, .. } => Some(row),
            GradeOutcome::Unreadable { .. } => None,
        })
    }

    /// (filename, reason) for every document that could not be read.
    pub fn unreadable(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            GradeOutcome::Unreadable { filename, reason } => Some((filename.as_str(), reason.as_str())),
            GradeOutcome::Graded { .. } => None,
        })
    }

    pub fn graded_count(&self) -> usize {
        self.rows().count()
    }
}

impl fmt::Display for GradingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .rows()
            .map(|row| row.student_name.chars().count())
            .chain(std::iter::once("Alumno".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<width$}  {:>9}  {:>15}  {:>7}",
            "Alumno",
            "Correctas",
            "Total Preguntas",
            "Nota 20",
            width = name_width
        )?;
        for row in self.rows() {
            writeln!(
                f,
                "{:<width$}  {:>9}  {:>15}  {:>7.2}",
                row.student_name,
                row.correct_count,
                row.total_questions,
                row.normalized_score,
                width = name_width
            )?;
        }
        for (filename, reason) in self.unreadable() {
            writeln!(f, "! {}: {}", filename, reason)?;
        }
        Ok(())
    }
}

/// Reads the key from a parsed key document and classifies it.
/// An empty key refuses grading; a short one is accepted with a warning.
pub fn load_key(doc: &impl DocumentView, config: &GradingConfig) -> Result<LoadedKey, GradingError> {
    let key = extract_key(doc, config.key_size);
    if key.is_empty() {
        tracing::error!("No answer letters found in the key document");
        return Err(GradingError::EmptyKey);
    }

    let status = if key.len() < config.key_size {
        tracing::warn!(
            "Answer key is short: found {} of {} answers; scores will be computed over {} questions",
            key.len(),
            config.key_size,
            key.len()
        );
        KeyStatus::Short { found: key.len(), expected: config.key_size }
    } else {
        KeyStatus::Complete
    };

    tracing::info!("Answer key extracted: {}", key);
    Ok(LoadedKey { key, status })
}

/// Grades student documents against one answer key.
pub struct GradingSession {
    key: AnswerKey,
}

impl GradingSession {
    pub fn new(key: AnswerKey) -> Result<Self, GradingError> {
        if key.is_empty() {
            return Err(GradingError::EmptyKey);
        }
        Ok(Self { key })
    }

    /// Extracts name and answers from one parsed document and scores them.
    pub fn grade_document(
        &self,
        doc: &impl DocumentView,
        filename: &str,
    ) -> Result<(StudentSubmission, GradeRow), GradingError> {
        let display_name = extract_name(doc, filename);
        let answers = extract_answers(doc, self.key.len());
        let result = score(&answers, &self.key)?;

        tracing::debug!(
            "{} ({}): {} answers, {}/{} correct",
            display_name,
            filename,
            answers.len(),
            result.correct,
            result.total
        );

        let row = GradeRow {
            student_name: display_name.clone(),
            correct_count: result.correct,
            total_questions: result.total,
            normalized_score: result.normalized,
        };
        let submission = StudentSubmission {
            display_name,
            answers,
            source_filename: filename.to_string(),
        };
        Ok((submission, row))
    }

    /// Parses and grades one upload; a parse failure becomes an `Unreadable` outcome.
    pub fn grade_upload(&self, upload: &StudentUpload) -> Result<GradeOutcome, GradingError> {
        let doc = match docx::parse(&upload.bytes) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Could not read '{}': {}", upload.filename, e);
                return Ok(GradeOutcome::Unreadable {
                    filename: upload.filename.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let (submission, row) = self.grade_document(&doc, &upload.filename)?;
        Ok(GradeOutcome::Graded { submission, row })
    }

    /// Grades every upload in order. One bad document never stops the batch.
    pub fn grade(&self, uploads: &[StudentUpload]) -> Result<GradingReport, GradingError> {
        if uploads.is_empty() {
            return Err(GradingError::NoSubmissions);
        }

        let outcomes = uploads
            .iter()
            .map(|upload| self.grade_upload(upload))
            .collect::<Result<Vec<_>, _>>()?;

        let report = GradingReport { key: self.key.clone(), outcomes };
        tracing::info!(
            "Graded {} of {} documents ({} unreadable)",
            report.graded_count(),
            uploads.len(),
            uploads.len() - report.graded_count()
        );
        Ok(report)
    }
}
