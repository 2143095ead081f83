//! Error handling for AnnoKit
//!
//! Almost every canvas operation is infallible by construction: undersized drags are
//! discarded, stale identifiers are no-ops and unready images fall back to a unit size.
//! The errors here cover the remaining edges:
//! - Session errors (image navigation requests that cannot be honoured)
//! - I/O errors surfaced by collaborators (configuration files, image probing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Session error type
///
/// Represents requests against the per-image session that cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The image source holds no images
    #[error("No images loaded")]
    NoImages,

    /// Requested image index is outside the image source
    #[error("Image index {index} out of range (0..{len})")]
    ImageOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of images available.
        len: usize,
    },

    /// Navigation refused because the working set has unsaved edits
    #[error("Unsaved changes on image {index}; save or discard before navigating")]
    UnsavedChanges {
        /// Index of the image holding unsaved edits.
        index: usize,
    },
}

/// Main error type for AnnoKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }

    /// Check if navigation was refused because of unsaved edits
    pub fn is_unsaved_changes(&self) -> bool {
        matches!(self, Error::Session(SessionError::UnsavedChanges { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
