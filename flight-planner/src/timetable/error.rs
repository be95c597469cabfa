//! Timetable loading errors.

use std::path::PathBuf;

/// Errors from loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// The input could not be opened
    #[error("cannot open timetable {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be turned into a flight
    #[error("malformed timetable at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },
}

impl TimetableError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        TimetableError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
