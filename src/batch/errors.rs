// ============================================================================
// Batch Errors
// Error types for reading token pairs and writing reports
// ============================================================================

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while running a batch.
///
/// Malformed literals are not errors at this level; they become
/// [`PairOutcome`](crate::domain::PairOutcome)s and the batch continues.
#[derive(Debug)]
pub enum BatchError {
    /// The input source could not be opened
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// Reading from an open source failed
    Read(io::Error),
    /// The sink failed to accept an outcome
    Write(io::Error),
    /// The report configuration failed validation
    InvalidConfig(String),
}

impl BatchError {
    /// Whether the batch never started because its source was unavailable
    #[inline]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, BatchError::SourceUnavailable { .. })
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::SourceUnavailable { path, source } => {
                write!(f, "could not open file {}: {}", path.display(), source)
            },
            BatchError::Read(err) => write!(f, "failed to read input: {}", err),
            BatchError::Write(err) => write!(f, "failed to write report: {}", err),
            BatchError::InvalidConfig(reason) => {
                write!(f, "invalid report configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::SourceUnavailable { source, .. } => Some(source),
            BatchError::Read(err) | BatchError::Write(err) => Some(err),
            BatchError::InvalidConfig(_) => None,
        }
    }
}

/// Result type alias for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = BatchError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not open file missing.txt: not found");
        assert!(err.is_source_unavailable());

        let err = BatchError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "failed to write report: closed");
        assert!(!err.is_source_unavailable());

        let err = BatchError::InvalidConfig("Separator cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid report configuration: Separator cannot be empty"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_source_chain() {
        let err = BatchError::Read(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "bad utf-8");
    }
}
