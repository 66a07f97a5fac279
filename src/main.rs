// src/main.rs
mod document;
mod extractors;
mod grading;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use grading::{load_key, GradingConfig, GradingSession, KeyStatus, DEFAULT_KEY_SIZE};
use storage::{uploads, ReportWriter, DEFAULT_OUTPUT};
use utils::error::GradingError;
use utils::AppError;

/// Grades multiple-choice answer sheets (.docx) against an answer key document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Answer key document (.docx); answers are read from its tables
    #[arg(short, long)]
    key: PathBuf,

    /// Student documents or directories of documents, graded in the order given
    #[arg(required = true)]
    students: Vec<PathBuf>,

    /// Path of the results workbook
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of questions on the exam (answers read from the key)
    #[arg(long, env = "EXAM_GRADER_KEY_SIZE", default_value_t = DEFAULT_KEY_SIZE)]
    key_size: usize,

    /// Do not write the JSON metadata file next to the workbook
    #[arg(long)]
    no_metadata: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting grading run for args: {:?}", args);

    if args.key_size == 0 {
        return Err(AppError::Config("--key-size must be at least 1".to_string()));
    }
    let config = GradingConfig { key_size: args.key_size };

    // 3. Load the answer key; nothing is graded without one
    let key_bytes = uploads::read_document(&args.key).await?;
    let key_doc = document::docx::parse(&key_bytes).map_err(|source| AppError::KeyDocument {
        path: args.key.display().to_string(),
        source,
    })?;
    let loaded = load_key(&key_doc, &config)?;

    println!("Clave extraída: {}", loaded.key);
    if let KeyStatus::Short { found, expected } = loaded.status {
        println!(
            "Aviso: la clave solo tiene {} de {} respuestas; las notas se calculan sobre {}.",
            found, expected, found
        );
    }

    // 4. Gather the student documents
    let paths = uploads::collect_document_paths(&args.students)?;
    if paths.is_empty() {
        return Err(GradingError::NoSubmissions.into());
    }
    tracing::info!("Found {} student documents", paths.len());
    let student_uploads = uploads::read_uploads(&paths).await?;

    // 5. Grade every document
    let session = GradingSession::new(loaded.key.clone())?;
    let report = session.grade(&student_uploads)?;

    // 6. Show and export the results
    print!("{}", report);

    let writer = ReportWriter::new(&args.output)?;
    let workbook_path = writer.save_workbook(&report)?;
    println!("Evaluación completa. Resultados guardados en {}", workbook_path.display());

    if !args.no_metadata {
        match writer.save_metadata(&loaded, &report) {
            Ok(path) => tracing::info!("Saved run metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save run metadata: {}", e),
        }
    }

    let graded = report.graded_count();
    let failed = report.outcomes.len() - graded;
    tracing::info!("Grading finished. Graded: {}, Unreadable: {}", graded, failed);

    if graded == 0 {
        return Err(AppError::Processing(format!(
            "None of the {} student documents could be read",
            failed
        )));
    }

    Ok(())
}
