//! License lookup errors
//!
//! Scoped to a single repository. The resolver logs these and drops the
//! repository from the result set; they never abort a run.

use thiserror::Error;

/// Failure fetching one repository's license from the remote endpoint
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request for {repository} failed: {reason}")]
    Transport { repository: String, reason: String },

    #[error("Got status code {status} for {repository}. Please try adding an access token.")]
    Status { repository: String, status: u16 },

    #[error("Unexpected response body for {repository}: {reason}")]
    InvalidResponse { repository: String, reason: String },

    #[error("Could not decode license from Base64 for {repository}")]
    Base64 { repository: String },

    #[error("License for {repository} is not valid UTF-8")]
    Utf8 { repository: String },
}

impl LookupError {
    /// The `owner/name` of the repository this error belongs to
    pub fn repository(&self) -> &str {
        match self {
            LookupError::Transport { repository, .. }
            | LookupError::Status { repository, .. }
            | LookupError::InvalidResponse { repository, .. }
            | LookupError::Base64 { repository }
            | LookupError::Utf8 { repository } => repository,
        }
    }
}
