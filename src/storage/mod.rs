// src/storage/mod.rs
pub mod uploads;

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::grading::{GradingReport, LoadedKey};
use crate::utils::error::StorageError;

pub const SHEET_NAME: &str = "Resultados";
pub const COLUMNS: [&str; 4] = ["Alumno", "Correctas", "Total Preguntas", "Nota 20"];
pub const DEFAULT_OUTPUT: &str = "resultados_examenes.xlsx";

pub struct ReportWriter {
    workbook_path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer for the given workbook path, creating its directory if needed
    pub fn new<P: AsRef<Path>>(workbook_path: P) -> Result<Self, StorageError> {
        let workbook_path = workbook_path.as_ref().to_path_buf();

        if let Some(parent) = workbook_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        Ok(Self { workbook_path })
    }

    /// Sidecar path: `resultados.xlsx` -> `resultados_meta.json`
    pub fn metadata_path(&self) -> PathBuf {
        let stem = self
            .workbook_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resultados".to_string());
        self.workbook_path.with_file_name(format!("{}_meta.json", stem))
    }

    /// Writes the results sheet
    pub fn save_workbook(&self, report: &GradingReport) -> Result<PathBuf, StorageError> {
        let mut workbook = build_workbook(report)?;
        workbook.save(&self.workbook_path)?;

        tracing::info!("Saved results workbook to {}", self.workbook_path.display());
        Ok(self.workbook_path.clone())
    }

    /// Saves metadata about the grading run in JSON format
    pub fn save_metadata(&self, loaded: &LoadedKey, report: &GradingReport) -> Result<PathBuf, StorageError> {
        let file_path = self.metadata_path();

        let unreadable: Vec<serde_json::Value> = report
            .unreadable()
            .map(|(filename, reason)| serde_json::json!({ "filename": filename, "reason": reason }))
            .collect();
        let rows: Vec<_> = report.rows().collect();

        let metadata = serde_json::json!({
            "key": loaded.key,
            "key_status": loaded.status,
            "documents": report.outcomes.len(),
            "results": rows,
            "unreadable": unreadable,
            "workbook": self.workbook_path.display().to_string(),
            "grading_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

/// Builds the single-sheet results workbook: one header row, then one row per
/// graded document in upload order. No index column.
pub fn build_workbook(report: &GradingReport) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let grade_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, row) in report.rows().enumerate() {
        let line = index as u32 + 1;
        worksheet.write_string(line, 0, row.student_name.as_str())?;
        worksheet.write_number(line, 1, row.correct_count as f64)?;
        worksheet.write_number(line, 2, row.total_questions as f64)?;
        worksheet.write_number_with_format(line, 3, row.normalized_score, &grade_format)?;
    }

    worksheet.autofit();
    Ok(workbook)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{AnswerKey, AnswerLetter, GradeOutcome, GradeRow, KeyStatus, StudentSubmission};
    use std::io::Read;

    fn sample_report() -> (LoadedKey, GradingReport) {
        let key = AnswerKey::new(vec![AnswerLetter::A, AnswerLetter::B]);
        let row = GradeRow {
            student_name: "Ana Torres".into(),
            correct_count: 1,
            total_questions: 2,
            normalized_score: 10.0,
        };
        let submission = StudentSubmission {
            display_name: "Ana Torres".into(),
            answers: vec![AnswerLetter::A, AnswerLetter::C],
            source_filename: "ana.docx".into(),
        };
        let report = GradingReport {
            key: key.clone(),
            outcomes: vec![
                GradeOutcome::Graded { submission, row },
                GradeOutcome::Unreadable { filename: "roto.docx".into(), reason: "bad zip".into() },
            ],
        };
        let loaded = LoadedKey { key, status: KeyStatus::Short { found: 2, expected: 10 } };
        (loaded, report)
    }

    fn zip_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("workbook is a zip");
        let mut entry = archive.by_name(name).expect("entry present");
        let mut content = String::new();
        entry.read_to_string(&mut content).expect("utf-8 entry");
        content
    }

    #[test]
    fn test_workbook_has_results_sheet_and_headers() {
        let (_, report) = sample_report();
        let bytes = build_workbook(&report).unwrap().save_to_buffer().unwrap();

        let workbook_xml = zip_entry(&bytes, "xl/workbook.xml");
        assert!(workbook_xml.contains(r#"name="Resultados""#));
        assert_eq!(workbook_xml.matches("<sheet ").count(), 1);

        let strings = zip_entry(&bytes, "xl/sharedStrings.xml");
        for column in COLUMNS {
            assert!(strings.contains(column), "missing column {}", column);
        }
        assert!(strings.contains("Ana Torres"));
        assert!(!strings.contains("roto.docx"));
    }

    #[test]
    fn test_save_workbook_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("out").join("notas.xlsx")).unwrap();
        let (loaded, report) = sample_report();

        let workbook_path = writer.save_workbook(&report).unwrap();
        assert!(workbook_path.exists());

        let metadata_path = writer.save_metadata(&loaded, &report).unwrap();
        assert_eq!(metadata_path.file_name().unwrap(), "notas_meta.json");

        let metadata: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(metadata_path).unwrap()).unwrap();
        assert_eq!(metadata["key"], serde_json::json!(["A", "B"]));
        assert_eq!(metadata["key_status"]["status"], "short");
        assert_eq!(metadata["documents"], 2);
        assert_eq!(metadata["results"][0]["Alumno"], "Ana Torres");
        assert_eq!(metadata["unreadable"][0]["filename"], "roto.docx");
    }
}
