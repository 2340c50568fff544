// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read note file: {0}")]
    ReadFailure(#[from] std::io::Error),
    #[error("Invalid note JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Timestamp out of range: {0} usec")]
    TimestampOutOfRange(i64),
}
