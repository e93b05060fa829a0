//! # Directory Errors
//!
//! Recoverable failures of the fetch and search pipeline. Neither is fatal:
//! the controller turns both into the empty-state display.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// The provider answered with a non-success status, or could not be
    /// reached or decoded (`status` is `None` then)
    Request {
        path: String,
        status: Option<u16>,
        message: String,
    },
    /// Every search strategy failed for the query
    NoResults { query: String },
}

impl DirectoryError {
    pub fn request(path: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        DirectoryError::Request {
            path: path.into(),
            status,
            message: message.into(),
        }
    }

    /// Whether an `anyhow` error wraps a [`DirectoryError::Request`]
    pub fn is_request(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::Request { .. })
        )
    }

    pub fn is_no_results(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::NoResults { .. })
        )
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Request {
                path,
                status: Some(status),
                message,
            } => write!(f, "Failed to fetch data: {path} (HTTP {status}) {message}"),
            DirectoryError::Request {
                path,
                status: None,
                message,
            } => write!(f, "Failed to fetch data: {path}: {message}"),
            DirectoryError::NoResults { query } => write!(f, "No results for '{query}'"),
        }
    }
}

impl std::error::Error for DirectoryError {}
