//! Error types for eventcal.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ValidationIssue;

/// Errors that can occur while loading or configuring eventcal.
///
/// The query engines (filter, search, windowing) never produce errors;
/// a record missing a field simply fails to match.
#[derive(Error, Debug)]
pub enum EventcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {path}: {message}")]
    Yaml { path: PathBuf, message: String },

    #[error("Invalid event file {path}: {}", format_issues(.issues))]
    InvalidEvent {
        path: PathBuf,
        issues: Vec<ValidationIssue>,
    },

    #[error("Duplicate event id '{id}' in {path}")]
    DuplicateId { id: String, path: PathBuf },

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for eventcal operations.
pub type EventcalResult<T> = Result<T, EventcalError>;
