//! Error types for MediaDock core operations.
//!
//! Errors are grouped by domain (downloads, themes, storage) and wrapped by the
//! crate-level [`Error`]. Every error can be classified with [`Error::kind`],
//! which the host uses to build structured responses for the front end.

use std::path::PathBuf;

use thiserror::Error;

use crate::queue::{DownloadId, DownloadStatus};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the download queue store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// No record with the given identifier exists.
    #[error("Download not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: DownloadId,
    },

    /// No streaming catalog entry has the given identifier.
    #[error("Streaming video not found: {id}")]
    UnknownVideo {
        /// The catalog identifier that was looked up.
        id: String,
    },

    /// The source URL is malformed or does not match the selected platform.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The title is blank.
    #[error("Download title cannot be empty")]
    EmptyTitle,

    /// Progress is outside 0..=100.
    #[error("Progress must be between 0 and 100, got {progress}")]
    InvalidProgress {
        /// The rejected progress value.
        progress: u8,
    },

    /// The requested status change is not allowed by the state machine.
    #[error("Illegal status transition for {id}: {from} -> {to}")]
    IllegalTransition {
        /// The record being updated.
        id: DownloadId,
        /// Current status.
        from: DownloadStatus,
        /// Requested status.
        to: DownloadStatus,
    },

    /// The record already reached `completed` or `error`.
    #[error("Download {id} is already {status}")]
    AlreadyFinished {
        /// The finished record.
        id: DownloadId,
        /// Its terminal status.
        status: DownloadStatus,
    },
}

/// Errors raised by the theme store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The identifier is not in the theme catalog.
    #[error("Unknown theme: {id}")]
    UnknownTheme {
        /// The identifier that was requested.
        id: String,
    },
}

/// Errors raised by preference storage backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing file could not be read.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// The backing file could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// A directory needed by the store could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// The backing file exists but does not hold a valid preference map.
    #[error("Corrupted preference file {path}: {reason}")]
    Corrupted {
        /// Path of the backing file.
        path: PathBuf,
        /// Parse failure.
        reason: String,
    },

    /// The store is not reachable at all (e.g. lock poisoned).
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Broad error category, used for programmatic handling across IPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The referenced entity does not exist.
    NotFound,
    /// The caller supplied invalid input.
    InvalidInput,
    /// The operation conflicts with the current state.
    Conflict,
    /// Preference storage failed.
    Storage,
    /// Configuration could not be loaded or saved.
    Configuration,
    /// Unexpected internal failure.
    Internal,
}

/// Errors that can occur in MediaDock core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Download queue error.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Theme store error.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Preference storage error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Download(DownloadError::NotFound { .. } | DownloadError::UnknownVideo { .. }) => {
                ErrorKind::NotFound
            }
            Self::Download(
                DownloadError::IllegalTransition { .. } | DownloadError::AlreadyFinished { .. },
            ) => ErrorKind::Conflict,
            Self::Download(_) | Self::Theme(_) => ErrorKind::InvalidInput,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) | Self::Serialization(_) => ErrorKind::Internal,
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Only storage failures are transient; everything else is a property of
    /// the input or of the current state.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Storage(
                StorageError::ReadFailed { .. }
                    | StorageError::WriteFailed { .. }
                    | StorageError::Unavailable(_)
            ) | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_display() {
        let err: Error = ThemeError::UnknownTheme {
            id: "neon-pink".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown theme: neon-pink");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_download_not_found_kind() {
        let id = DownloadId::new();
        let err: Error = DownloadError::NotFound { id }.into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_illegal_transition_display() {
        let err = DownloadError::IllegalTransition {
            id: DownloadId::new(),
            from: DownloadStatus::Completed,
            to: DownloadStatus::Downloading,
        };
        let msg = err.to_string();
        assert!(msg.contains("completed -> downloading"));
        assert_eq!(Error::from(err).kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::WriteFailed {
            path: PathBuf::from("/data/preferences.json"),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/data/preferences.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_storage_errors_are_retryable() {
        let err: Error = StorageError::Unavailable("lock poisoned".to_string()).into();
        assert!(err.is_retryable());

        let err: Error = StorageError::Corrupted {
            path: PathBuf::from("/p.json"),
            reason: "eof".to_string(),
        }
        .into();
        assert!(!err.is_retryable());
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
