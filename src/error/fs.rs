//! File system errors

use std::path::Path;

use super::AcknowledgementsError;

/// Creates a directory listing error
pub fn directory_read_failed(path: &Path, err: &std::io::Error) -> AcknowledgementsError {
    AcknowledgementsError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory creation error
pub fn directory_create_failed(path: &Path, err: &std::io::Error) -> AcknowledgementsError {
    AcknowledgementsError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file read error
pub fn read_failed(path: &Path, err: &std::io::Error) -> AcknowledgementsError {
    AcknowledgementsError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: &std::io::Error) -> AcknowledgementsError {
    AcknowledgementsError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
