//! Remote license lookup
//!
//! [`LicenseLookup`] is the seam between the resolver and the network.
//! [`GitHubClient`] implements it against the GitHub REST API's
//! "get the license for a repository" endpoint.

pub mod client;

use std::future::Future;

use crate::error::LookupError;
use crate::source::RepositoryCoordinates;

pub use client::{GitHubClient, GitHubConfig};

/// Fetches the plain-text license of one repository
///
/// Implementations are shared across concurrently running lookup tasks.
pub trait LicenseLookup: Send + Sync + 'static {
    fn fetch_license(
        &self,
        repository: &RepositoryCoordinates,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}
