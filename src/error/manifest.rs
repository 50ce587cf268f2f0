//! Manifest errors

use std::path::Path;

use super::AcknowledgementsError;

/// Creates a "no project container" error for the searched directory
pub fn not_found(directory: &Path) -> AcknowledgementsError {
    AcknowledgementsError::ManifestNotFound {
        directory: directory.display().to_string(),
    }
}

/// Creates a parse error carrying the attempted manifest location
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> AcknowledgementsError {
    AcknowledgementsError::ManifestParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
