//! Transfer errors carrying the failing path

use floatbuf_core::ErrorKind;
use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// A failed load or store
///
/// Carries the [`ErrorKind`], the path that was being transferred and, when
/// the failure came from the OS, the underlying [`io::Error`].
#[derive(Debug)]
pub struct TransferError {
    kind: ErrorKind,
    path: PathBuf,
    source: Option<io::Error>,
}

impl TransferError {
    pub fn new(kind: ErrorKind, path: impl AsRef<Path>) -> Self {
        Self {
            kind,
            path: path.as_ref().to_path_buf(),
            source: None,
        }
    }

    pub fn with_source(kind: ErrorKind, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            kind,
            path: path.as_ref().to_path_buf(),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.path.display())
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for buffer transfers
pub type Result<T> = std::result::Result<T, TransferError>;
