//! Error types for splits document processing.
//!
//! Every failure the codec can produce is a distinct [`SplitsError`] variant, so a
//! host application can decide whether a bad document is fatal or something the
//! user can fix by hand.
//!
//! ## Error Categories
//!
//! - **Format Errors**: A value is present but malformed (time, datetime, integer)
//! - **Structural Errors**: A required attribute is missing
//! - **Markup Errors**: The text is not a well-formed splits document
//! - **File Errors**: The document could not be read from or written to storage
//!
//! ## Recovery
//!
//! ```rust
//! use splitwrapper::SplitsError;
//!
//! let error = SplitsError::missing_attribute("Attempt", "id");
//! if error.is_user_correctable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for splits operations.
pub type Result<T, E = SplitsError> = std::result::Result<T, E>;

/// Main error type for splits operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SplitsError {
    #[error("Malformed {context}: {details}")]
    Format { context: String, details: String },

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Document is not well-formed markup")]
    Markup {
        #[source]
        source: roxmltree::Error,
    },

    #[error("Expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    #[error("Splits file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitsError {
    /// Returns whether the document itself is at fault and could be repaired by editing it.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            SplitsError::Format { .. } => true,
            SplitsError::MissingAttribute { .. } => true,
            SplitsError::Markup { .. } => true,
            SplitsError::UnexpectedRoot { .. } => true,
            SplitsError::File { .. } => false,
        }
    }

    /// Returns whether this is a structural failure (a required attribute is absent).
    pub fn is_structural(&self) -> bool {
        matches!(self, SplitsError::MissingAttribute { .. })
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SplitsError::Format { .. } => vec![
                "Check times use the H:MM:SS.fffffff layout",
                "Check attempt dates use MM/DD/YYYY HH:MM:SS",
                "Check numeric fields contain whole numbers",
            ],
            SplitsError::MissingAttribute { .. } => vec![
                "Restore the missing field from a backup copy",
                "Re-save the splits from the timer that produced them",
            ],
            SplitsError::Markup { .. } | SplitsError::UnexpectedRoot { .. } => vec![
                "Verify the file is a splits document",
                "Check the file was not truncated while saving",
            ],
            SplitsError::File { .. } => vec![
                "Check file exists and is readable",
                "Check permissions on the target directory",
                "Ensure sufficient disk space",
            ],
        }
    }

    /// Helper constructor for malformed values.
    pub fn format_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        SplitsError::Format { context: context.into(), details: details.into() }
    }

    /// Helper constructor for a required attribute that is absent.
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        SplitsError::MissingAttribute { element: element.into(), attribute: attribute.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        SplitsError::File { path, source }
    }
}

impl From<roxmltree::Error> for SplitsError {
    fn from(err: roxmltree::Error) -> Self {
        SplitsError::Markup { source: err }
    }
}

impl From<std::io::Error> for SplitsError {
    fn from(err: std::io::Error) -> Self {
        SplitsError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
