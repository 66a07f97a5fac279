// src/grading/types.rs
use serde::Serialize;
use std::fmt;

// --- Answers ---

/// One of the four fixed choices. Parsed case-insensitively, always upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Reads a table cell: after trimming, the whole cell must be a single choice letter.
    pub fn from_cell(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The reference answers, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerKey {
    letters: Vec<AnswerLetter>,
}

impl AnswerKey {
    pub fn new(letters: Vec<AnswerLetter>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[AnswerLetter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.letters.iter().map(ToString::to_string).collect();
        write!(f, "{}", letters.join(" "))
    }
}

/// Whether the key document yielded the full question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeyStatus {
    Complete,
    /// Fewer letters than questions: scores are computed over `found` questions.
    Short { found: usize, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedKey {
    pub key: AnswerKey,
    pub status: KeyStatus,
}

// --- Per-student records ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSubmission {
    pub display_name: String,
    pub answers: Vec<AnswerLetter>,
    pub source_filename: String,
}

/// One line of the results sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRow {
    #[serde(rename = "Alumno")]
    pub student_name: String,
    #[serde(rename = "Correctas")]
    pub correct_count: usize,
    #[serde(rename = "Total Preguntas")]
    pub total_questions: usize,
    #[serde(rename = "Nota 20")]
    pub normalized_score: f64,
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_letters_are_case_insensitive() {
        assert_eq!(AnswerLetter::from_cell(" b\n"), Some(AnswerLetter::B));
        assert_eq!(AnswerLetter::from_cell("D"), Some(AnswerLetter::D));
    }

    #[test]
    fn test_cell_rejects_other_content() {
        for cell in ["", "   ", "E", "AB", "1", "a)", "Respuesta"] {
            assert_eq!(AnswerLetter::from_cell(cell), None, "cell {:?}", cell);
        }
    }

    #[test]
    fn test_key_display_and_serialization() {
        let key = AnswerKey::new(vec![AnswerLetter::A, AnswerLetter::C]);
        assert_eq!(key.to_string(), "A C");
        assert_eq!(serde_json::to_string(&key).unwrap(), r#"["A","C"]"#);
    }

    #[test]
    fn test_grade_row_uses_sheet_column_names() {
        let row = GradeRow {
            student_name: "Ana".into(),
            correct_count: 9,
            total_questions: 10,
            normalized_score: 18.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Alumno"], "Ana");
        assert_eq!(json["Correctas"], 9);
        assert_eq!(json["Total Preguntas"], 10);
        assert_eq!(json["Nota 20"], 18.0);
    }
}
