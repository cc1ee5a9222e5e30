//! Parse error type for the CSV normalizer

/// Structural problems that stop a CSV feed from being parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A quoted field was opened but never closed
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    /// The input bytes are not valid UTF-8
    #[error("Input is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    InvalidEncoding { offset: usize },

    /// Any other error reported by the CSV reader
    #[error(
        "Malformed CSV{}: {message}",
        .line.map(|l| format!(" at line {l}")).unwrap_or_default()
    )]
    Malformed { line: Option<u64>, message: String },
}

impl From<csv::Error> for ParseError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Utf8 { pos, err } => ParseError::Malformed {
                line: pos.as_ref().map(csv::Position::line),
                message: format!("invalid UTF-8 in field {}", err.field() + 1),
            },
            _ => ParseError::Malformed {
                line: error.position().map(csv::Position::line),
                message: error.to_string(),
            },
        }
    }
}
