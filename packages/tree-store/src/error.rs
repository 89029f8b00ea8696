//! Error types for tree store operations.

use std::fmt;

use crate::path::Path;

/// The public operation that failed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Operation {
    CreateDirectory,
    ReadDirectory,
    ReadFile,
    WriteFile,
    Remove,
    Lookup,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateDirectory => "create_directory",
            Operation::ReadDirectory => "read_directory",
            Operation::ReadFile => "read_file",
            Operation::WriteFile => "write_file",
            Operation::Remove => "remove",
            Operation::Lookup => "lookup",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required entry does not exist and creation was not permitted.
    NotFound,
    /// An entry exists but is the wrong kind (file vs. directory).
    TypeMismatch,
    /// A file exists but was never given content.
    EmptyContent,
}

/// Errors from tree store operations.
///
/// Every variant carries the failing operation and the offending path: the
/// prefix of the requested path up to and including the segment that failed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{operation}: no such file or directory '{path}'")]
    NotFound { operation: Operation, path: Path },

    /// A file was found where a directory was required. This is also the
    /// error for a file used as an intermediate segment.
    #[error("{operation}: '{path}' is a file, not a directory")]
    NotADirectory { operation: Operation, path: Path },

    /// A directory was found where a file was required.
    #[error("{operation}: '{path}' is a directory, not a file")]
    IsADirectory { operation: Operation, path: Path },

    #[error("{operation}: file '{path}' has no content")]
    EmptyContent { operation: Operation, path: Path },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::NotADirectory { .. } | Error::IsADirectory { .. } => ErrorKind::TypeMismatch,
            Error::EmptyContent { .. } => ErrorKind::EmptyContent,
        }
    }

    /// True when nothing readable exists at the path.
    ///
    /// A file without content counts as not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound | ErrorKind::EmptyContent)
    }

    pub fn operation(&self) -> Operation {
        match self {
            Error::NotFound { operation, .. }
            | Error::NotADirectory { operation, .. }
            | Error::IsADirectory { operation, .. }
            | Error::EmptyContent { operation, .. } => *operation,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound { path, .. }
            | Error::NotADirectory { path, .. }
            | Error::IsADirectory { path, .. }
            | Error::EmptyContent { path, .. } => path,
        }
    }
}

/// Result type alias for tree store operations.
pub type Result<T> = std::result::Result<T, Error>;
