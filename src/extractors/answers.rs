// src/extractors/answers.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::DocumentView;
use crate::grading::types::AnswerLetter;

// A marked run answers a question when it starts with a choice letter,
// optionally behind an opening parenthesis: "b", "(C) Lima", "D) 42".
static MARKED_ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([A-Da-d])").expect("Failed to compile MARKED_ANSWER_RE")
});

/// Collects a student's answers, at most `expected_count` of them.
///
/// Table answers come first, then answers marked inline by underline or
/// highlight. When a document uses both conventions and the total exceeds
/// `expected_count`, the inline answers are the ones cut off.
pub fn extract_answers(doc: &impl DocumentView, expected_count: usize) -> Vec<AnswerLetter> {
    let from_tables = table_answers(doc);
    let from_runs = marked_run_answers(doc);

    tracing::debug!(
        "Answer candidates: {} from tables, {} from marked runs (keeping {})",
        from_tables.len(),
        from_runs.len(),
        expected_count
    );
    if !from_tables.is_empty() && !from_runs.is_empty() {
        tracing::debug!("Document mixes table answers and marked-run answers; table answers take precedence");
    }

    from_tables
        .into_iter()
        .chain(from_runs)
        .take(expected_count)
        .collect()
}

/// Every table cell holding a single choice letter, in document order.
fn table_answers(doc: &impl DocumentView) -> Vec<AnswerLetter> {
    doc.table_cells().filter_map(AnswerLetter::from_cell).collect()
}

/// Leading choice letters of underlined or highlighted runs, in document order.
fn marked_run_answers(doc: &impl DocumentView) -> Vec<AnswerLetter> {
    let mut answers = Vec::new();

    for run in doc.paragraphs().iter().flat_map(|p| p.runs.iter()) {
        let text = run.text.trim();
        if text.is_empty() || !run.is_marked() {
            continue;
        }

        let letter = MARKED_ANSWER_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
            .and_then(AnswerLetter::from_char);

        if let Some(letter) = letter {
            tracing::trace!("Marked run '{}' answers {}", text, letter);
            answers.push(letter);
        }
    }

    answers
}
