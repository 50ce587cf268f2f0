//! Error types and handling for the acknowledgements generator
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors (fatal)
//! - [`manifest`]: `Package.resolved` discovery and parsing errors (fatal)
//! - [`lookup`]: Per-repository license lookup errors (never fatal)

pub mod fs;
pub mod lookup;
pub mod manifest;


pub use lookup::LookupError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for a generator run
///
/// Every variant aborts the run. Per-item failures use [`LookupError`] or
/// are logged as warnings and never reach this type.
#[derive(Error, Diagnostic, Debug)]
pub enum AcknowledgementsError {
    // Manifest errors
    #[error("Could not find .xcodeproj in {directory}")]
    #[diagnostic(
        code(acknowledgements::manifest::not_found),
        help(
            "Pass --directory-path pointing at the folder containing your .xcodeproj, or --package-resolved-path"
        )
    )]
    ManifestNotFound { directory: String },

    #[error("Could not parse Package.resolved at {path}: {reason}")]
    #[diagnostic(code(acknowledgements::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read directory: {path}")]
    #[diagnostic(code(acknowledgements::fs::directory_read_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(acknowledgements::fs::directory_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(acknowledgements::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(acknowledgements::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(acknowledgements::fs::io_error))]
    IoError { message: String },

    // Bundle errors
    #[error("Failed to encode property list for {name}: {reason}")]
    #[diagnostic(code(acknowledgements::bundle::encode_failed))]
    PropertyListEncodeFailed { name: String, reason: String },

    // GitHub errors
    #[error("Failed to build HTTP client: {reason}")]
    #[diagnostic(
        code(acknowledgements::github::client_failed),
        help("Check that the GitHub token only contains printable ASCII characters")
    )]
    HttpClientBuildFailed { reason: String },
}

impl From<std::io::Error> for AcknowledgementsError {
    fn from(err: std::io::Error) -> Self {
        AcknowledgementsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AcknowledgementsError>;
