//! Processing error type for the ranking pipeline

/// Failure of a ranking run
///
/// Raised when the sorted output breaks leaderboard order. No partial
/// leaderboard is produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("record '{name}' at position {position} scores above the record ranked before it")]
pub struct ProcessingError {
    /// 0-based position of the first misplaced record
    pub position: usize,

    /// Name of the misplaced record
    pub name: String,
}

impl ProcessingError {
    pub fn out_of_order(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}
