//! Concurrent license lookup for manifest pins
//!
//! One task per GitHub-hosted pin, all launched up front and joined at the
//! end. A failed lookup is logged and dropped; it never affects its siblings.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use super::ResolvedLicense;
use crate::error::LookupError;
use crate::github::LicenseLookup;
use crate::manifest::ManifestDocument;
use crate::source::RepositoryCoordinates;

/// Fetch the license of every pin whose location is a GitHub repository
///
/// Results are named after the pin identity and arrive in completion order.
pub async fn resolve<L: LicenseLookup>(
    manifest: &ManifestDocument,
    lookup: Arc<L>,
) -> Vec<ResolvedLicense> {
    let mut tasks = JoinSet::new();

    for pin in &manifest.pins {
        let Some(repository) = RepositoryCoordinates::from_location(&pin.source_location) else {
            warn!(
                "{} is not a valid GitHub URL. Skipping...",
                pin.source_location
            );
            continue;
        };

        info!(
            "Downloading license for {} at {}...",
            pin.identity, pin.source_location
        );
        let lookup = Arc::clone(&lookup);
        let identity = pin.identity.clone();
        tasks.spawn(async move {
            let result = lookup.fetch_license(&repository).await;
            (identity, result)
        });
    }

    let mut outcomes: Vec<(String, Result<String, LookupError>)> = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!("License lookup task did not complete: {e}"),
        }
    }

    outcomes
        .into_iter()
        .filter_map(|(identity, result)| match result {
            Ok(license_text) => Some(ResolvedLicense::new(identity, license_text)),
            Err(e) => {
                error!(
                    repository = e.repository(),
                    "Got error when trying to fetch license for {identity} from GitHub: {e}"
                );
                None
            }
        })
        .collect()
}
