/// Error types.
///
/// Two tiers:
/// - [`SortError`] is fatal and stops a run before any file is touched.
/// - [`FileFailure`] is recoverable and scoped to one file. The pipeline
///   records it in the report and moves on to the next file.
use std::io;
use std::path::PathBuf;

/// Invocation-level failure. Nothing under the root has been mutated when
/// one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("root path does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("root path is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why a single file could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    /// The file disappeared between scan and move.
    #[error("file vanished before it could be moved")]
    Vanished,

    /// The archive could not be read as any supported format.
    #[error("unsupported or corrupt archive: {reason}")]
    UnsupportedArchive { reason: String },

    /// The archive disappeared between scan and extraction.
    #[error("archive source is missing")]
    MissingArchiveSource,

    /// Any other I/O failure on this one file (permissions, disk full, ...).
    #[error("{message}")]
    Io { kind: io::ErrorKind, message: String },
}

impl FailureKind {
    /// Map an I/O error raised while moving a file.
    pub fn from_move_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::Vanished,
            kind => Self::Io {
                kind,
                message: err.to_string(),
            },
        }
    }
}

/// A recoverable, per-file failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {kind}", path.display())]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, kind: FailureKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_vanished() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(FailureKind::from_move_error(&err), FailureKind::Vanished);
    }

    #[test]
    fn other_errors_keep_their_kind() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        match FailureKind::from_move_error(&err) {
            FailureKind::Io { kind, .. } => assert_eq!(kind, io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn file_failure_display_includes_path_and_reason() {
        let failure = FileFailure::new("a/b.zip", FailureKind::MissingArchiveSource);
        let text = failure.to_string();
        assert!(text.contains("b.zip"), "{text}");
        assert!(text.contains("missing"), "{text}");
    }
}
