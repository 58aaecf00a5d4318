//! Result and error types for Cotejo.

use crate::report::ViolationReport;
use crate::snapshot::Phase;
use thiserror::Error;

/// Result type for Cotejo operations
pub type CotejoResult<T> = Result<T, CotejoError>;

/// Errors that can occur in Cotejo
#[derive(Debug, Error)]
pub enum CotejoError {
    /// A comparison asked for a phase that was never captured
    #[error("Snapshot for phase '{phase}' was not recorded")]
    PhaseNotRecorded {
        /// Phase that is missing
        phase: Phase,
    },

    /// Style expectation violated for one or more elements
    #[error("Style assertion failed: {report}")]
    StyleAssertion {
        /// Every offending element
        report: ViolationReport,
    },

    /// Page-level assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Requested item index is past the end of a collection
    #[error("Requested index {index} exceeds number of available items ({count})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available items
        count: usize,
    },

    /// Invalid comparator configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Capture collaborator failed to produce attributes
    #[error("Style capture failed: {message}")]
    Capture {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl CotejoError {
    /// Create a page-level assertion error
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a capture error
    #[must_use]
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture {
            message: message.into(),
        }
    }

    /// Whether this error means a snapshot was requested but never recorded
    #[must_use]
    pub const fn is_malformed_snapshot(&self) -> bool {
        matches!(self, Self::PhaseNotRecorded { .. })
    }

    /// Structured violations, when this is a style assertion failure
    #[must_use]
    pub const fn violations(&self) -> Option<&ViolationReport> {
        match self {
            Self::StyleAssertion { report } => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_not_recorded_message() {
        let err = CotejoError::PhaseNotRecorded {
            phase: Phase::Toggled,
        };
        assert!(err.to_string().contains("'toggled' was not recorded"));
        assert!(err.is_malformed_snapshot());
        assert!(err.violations().is_none());
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = CotejoError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(
            err.to_string(),
            "Requested index 5 exceeds number of available items (3)"
        );
    }

    #[test]
    fn test_constructors() {
        assert!(CotejoError::assertion("x")
            .to_string()
            .starts_with("Assertion failed"));
        assert!(CotejoError::config("bad")
            .to_string()
            .contains("Invalid configuration"));
        assert!(CotejoError::capture("gone")
            .to_string()
            .contains("Style capture failed"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CotejoError = io_err.into();
        assert!(err.to_string().contains("I/O"));
        assert!(!err.is_malformed_snapshot());
    }
}
