// src/domain/outcome.rs
use std::fmt;

use crate::domain::DomainError;

/// Why a source record did not make it into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidJson(String),
    ReadFailure(String),
    Trashed,
    TransformError(String),
}

/// Result of converting one source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Rendered `<note>` fragment
    Converted(String),
    Skipped(SkipReason),
}

impl SkipReason {
    pub fn is_error(&self) -> bool {
        !matches!(self, SkipReason::Trashed)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidJson(detail) => write!(f, "invalid JSON: {detail}"),
            SkipReason::ReadFailure(detail) => write!(f, "read failure: {detail}"),
            SkipReason::Trashed => write!(f, "note is trashed"),
            SkipReason::TransformError(detail) => write!(f, "transform error: {detail}"),
        }
    }
}

impl From<DomainError> for SkipReason {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::ReadFailure(e) => SkipReason::ReadFailure(e.to_string()),
            DomainError::InvalidJson(e) => SkipReason::InvalidJson(e.to_string()),
            e @ DomainError::TimestampOutOfRange(_) => SkipReason::TransformError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_json_error_when_converting_then_maps_to_invalid_json() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        let reason = SkipReason::from(DomainError::from(error));

        assert!(matches!(reason, SkipReason::InvalidJson(_)));
        assert!(reason.is_error());
    }

    #[test]
    fn given_io_error_when_converting_then_maps_to_read_failure() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

        let reason = SkipReason::from(DomainError::from(error));

        assert_eq!(reason, SkipReason::ReadFailure("gone".to_string()));
    }

    #[test]
    fn given_timestamp_error_when_converting_then_maps_to_transform_error() {
        let reason = SkipReason::from(DomainError::TimestampOutOfRange(i64::MAX));

        assert!(matches!(reason, SkipReason::TransformError(msg) if msg.contains("out of range")));
    }

    #[test]
    fn given_trashed_when_checking_error_then_is_not_error() {
        assert!(!SkipReason::Trashed.is_error());
        assert_eq!(SkipReason::Trashed.to_string(), "note is trashed");
    }
}
