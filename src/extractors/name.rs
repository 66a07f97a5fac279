// src/extractors/name.rs
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::DocumentView;
use crate::utils::text::title_case;

// Applied to upper-cased paragraph text: "NOMBRE:" or "NOMBRES:" and the rest of the line.
static NAME_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"NOMBRES?:\s*(.*)").expect("Failed to compile NAME_LABEL_RE")
});

/// Finds the student's display name.
///
/// The first paragraph carrying a "Nombre:" label wins, even when nothing
/// follows the label (the name is then empty). Without one, the
/// name comes from the file name: extension dropped, underscores turned
/// into spaces, title-cased.
pub fn extract_name(doc: &impl DocumentView, filename: &str) -> String {
    for paragraph in doc.paragraphs() {
        let text = paragraph.text().to_uppercase();
        let Some(captures) = NAME_LABEL_RE.captures(&text) else {
            continue;
        };

        let remainder = captures.get(1).map_or("", |m| m.as_str()).trim();
        tracing::trace!("Name label found: '{}'", text);
        return title_case(remainder);
    }

    let name = name_from_filename(filename);
    tracing::debug!("No name label in '{}', using file name: {}", filename, name);
    name
}

fn name_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    title_case(&stem.replace('_', " "))
}
