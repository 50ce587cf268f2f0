//! Generate command implementation
//!
//! Converts parsed arguments into a [`GenerateConfig`], builds the GitHub
//! client and runs the [`GenerateOperation`] against the local filesystem.

use std::sync::Arc;

use tracing::warn;

use crate::cli::Cli;
use crate::common::fs::LocalFileSystem;
use crate::error::Result;
use crate::github::{GitHubClient, GitHubConfig};
use crate::operations::{GenerateConfig, GenerateOperation, GenerateSummary};

impl From<&Cli> for GenerateConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            directory_path: cli.directory_path.clone(),
            languages: cli.languages.clone(),
            output_path: cli.output_path.clone(),
            package_cache_path: cli.package_cache_path.clone(),
            package_resolved_path: cli.package_resolved_path.clone(),
        }
    }
}

impl From<&Cli> for GitHubConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.github_api_url.clone(),
            token: cli
                .github_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        }
    }
}

/// Run the generate command
pub async fn run(cli: &Cli) -> Result<()> {
    let client = GitHubClient::new(&GitHubConfig::from(cli))?;
    let operation = GenerateOperation::new(
        &LocalFileSystem,
        Arc::new(client),
        GenerateConfig::from(cli),
    );

    let summary = operation.execute().await?;
    if summary.languages.is_empty() {
        warn!("No strings files written; the Acknowledgements title will not be localized");
    }
    println!("{}", summary_line(&summary));
    Ok(())
}

fn summary_line(summary: &GenerateSummary) -> String {
    let noun = if summary.licenses.len() == 1 {
        "license"
    } else {
        "licenses"
    };
    format!(
        "Wrote {} {noun} to {}",
        summary.licenses.len(),
        summary.bundle_dir.display()
    )
}
