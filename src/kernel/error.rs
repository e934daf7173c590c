//! Unified error taxonomy reported by the dispatch layer.

use std::fmt;

use crate::models::{DocumentsError, WorkspaceError};
use crate::services::search::SearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParent,
    NotFound,
    NotAFile,
    NotOpen,
    InvalidName,
    CannotDeleteRoot,
    InvalidPattern(String),
    OutOfRange { line: usize, line_count: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidParent => write!(f, "parent is not an existing folder"),
            ErrorKind::NotFound => write!(f, "entry not found"),
            ErrorKind::NotAFile => write!(f, "entry is not a file"),
            ErrorKind::NotOpen => write!(f, "document is not open"),
            ErrorKind::InvalidName => write!(f, "name is empty or contains a path separator"),
            ErrorKind::CannotDeleteRoot => write!(f, "cannot delete the workspace root"),
            ErrorKind::InvalidPattern(msg) => write!(f, "invalid pattern: {msg}"),
            ErrorKind::OutOfRange { line, line_count } => {
                write!(f, "line {line} is out of range (file has {line_count} lines)")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<WorkspaceError> for ErrorKind {
    fn from(err: WorkspaceError) -> Self {
        match err {
            WorkspaceError::InvalidParent => ErrorKind::InvalidParent,
            WorkspaceError::NotFound => ErrorKind::NotFound,
            WorkspaceError::NotAFile => ErrorKind::NotAFile,
            WorkspaceError::InvalidName => ErrorKind::InvalidName,
            WorkspaceError::CannotDeleteRoot => ErrorKind::CannotDeleteRoot,
        }
    }
}

impl From<DocumentsError> for ErrorKind {
    fn from(err: DocumentsError) -> Self {
        match err {
            DocumentsError::NotFound => ErrorKind::NotFound,
            DocumentsError::NotOpen => ErrorKind::NotOpen,
        }
    }
}

impl From<SearchError> for ErrorKind {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidPattern(inner) => ErrorKind::InvalidPattern(inner.to_string()),
        }
    }
}
