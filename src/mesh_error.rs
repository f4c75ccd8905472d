//! MeshError: Unified error type for mesh-triangle public APIs
//!
//! Every reader and constructor in this crate returns `Result<_, MeshError>`;
//! nothing in the read path panics on malformed input.

use std::path::Path;
use thiserror::Error;

/// Coarse classification of a [`MeshError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// File missing or unreadable.
    Io,
    /// Malformed header or row.
    Format,
    /// An id outside its declared range.
    Index,
    /// Parsed arrays disagree with each other.
    Internal,
}

/// Unified error type for mesh-triangle operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Opening or reading a source failed.
    #[error("I/O error on `{path}`: {message}")]
    Io {
        path: String,
        kind: std::io::ErrorKind,
        message: String,
    },
    /// A header or data row could not be parsed.
    #[error("{source_name}:{line}: {message}")]
    Format {
        source_name: String,
        line: usize,
        message: String,
    },
    /// The element file declares a different number of nodes per element
    /// than the reader was configured for.
    #[error("{source_name}: expected {expected} nodes per element, found {found}")]
    ArityMismatch {
        source_name: String,
        expected: usize,
        found: usize,
    },
    /// A 1-based id lies outside `[1, max]`.
    #[error("{source_name}:{line}: {entity} id {id} out of range [1, {max}]")]
    Index {
        source_name: String,
        line: usize,
        entity: &'static str,
        id: i64,
        max: usize,
    },
    /// The same id was defined twice under [`DuplicatePolicy::Reject`](crate::io::DuplicatePolicy::Reject).
    #[error("{source_name}:{line}: {entity} id {id} defined more than once")]
    DuplicateId {
        source_name: String,
        line: usize,
        entity: &'static str,
        id: usize,
    },
    /// Layer counts must be positive.
    #[error("layer count must be positive, got {0}")]
    InvalidLayerCount(usize),
    /// Assembled structures failed a consistency check.
    #[error("internal consistency failure: {0}")]
    Internal(String),
}

impl MeshError {
    /// Classify this error into the I/O, format, index or internal family.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeshError::Io { .. } => ErrorKind::Io,
            MeshError::Format { .. }
            | MeshError::ArityMismatch { .. }
            | MeshError::DuplicateId { .. }
            | MeshError::InvalidLayerCount(_) => ErrorKind::Format,
            MeshError::Index { .. } => ErrorKind::Index,
            MeshError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn io_at(path: &Path, err: std::io::Error) -> Self {
        MeshError::Io {
            path: path.display().to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub(crate) fn format(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        MeshError::Format {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io {
            path: String::new(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let err = MeshError::format("mesh.node", 3, "missing y coordinate");
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.to_string(), "mesh.node:3: missing y coordinate");

        let err = MeshError::ArityMismatch {
            source_name: "mesh.ele".into(),
            expected: 3,
            found: 4,
        };
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = MeshError::Index {
            source_name: "mesh.ele".into(),
            line: 2,
            entity: "node",
            id: 4,
            max: 3,
        };
        assert_eq!(err.kind(), ErrorKind::Index);
        assert_eq!(err.to_string(), "mesh.ele:2: node id 4 out of range [1, 3]");
    }

    #[test]
    fn io_errors_keep_kind_and_path() {
        let raw = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = MeshError::io_at(Path::new("/tmp/box.node"), raw);
        match &err {
            MeshError::Io { path, kind, .. } => {
                assert_eq!(path, "/tmp/box.node");
                assert_eq!(*kind, std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
