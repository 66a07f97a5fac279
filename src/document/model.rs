// src/document/model.rs

// --- Data Structures ---

/// A contiguous span of paragraph text with uniform formatting.
/// Only the two flags the graders care about are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledTextRun {
    pub text: String,
    pub is_underlined: bool,
    pub has_highlight: bool,
}

impl StyledTextRun {
    /// True when the student marked this run (underline or highlight).
    pub fn is_marked(&self) -> bool {
        self.is_underlined || self.has_highlight
    }
}

// Shorthand for building runs in tests.
#[cfg(test)]
impl StyledTextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn underlined(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_underlined: true, has_highlight: false }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_underlined: false, has_highlight: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<StyledTextRun>,
}

impl Paragraph {
    pub fn new(runs: Vec<StyledTextRun>) -> Self {
        Self { runs }
    }

    /// Plain text of the paragraph: its runs concatenated without separator.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A table as rows of cell plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Cells in reading order (row by row, left to right).
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flat_map(|row| row.iter().map(String::as_str))
    }
}

/// Read-only view of a parsed document, as the extractors see it.
/// Any source able to produce tables of cell text and paragraphs of styled
/// runs can back this trait.
pub trait DocumentView {
    fn tables(&self) -> &[Table];
    fn paragraphs(&self) -> &[Paragraph];

    /// Every table cell of the document in order: table, then row, then cell.
    fn table_cells(&self) -> impl Iterator<Item = &str> {
        self.tables().iter().flat_map(Table::cells)
    }
}

/// Owned document model produced by the `.docx` adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tables: Vec<Table>,
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(tables: Vec<Table>, paragraphs: Vec<Paragraph>) -> Self {
        Self { tables, paragraphs }
    }
}

impl DocumentView for Document {
    fn tables(&self) -> &[Table] {
        &self.tables
    }

    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}
