//! GitHub REST API client for repository licenses
//!
//! * Endpoint: `GET {api_url}/repos/{owner}/{name}/license`
//! * The response carries the license file base64-encoded in `content`.
//! * A token is optional; without one GitHub applies a low anonymous rate limit.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use super::LicenseLookup;
use crate::error::{AcknowledgementsError, LookupError, Result};
use crate::source::RepositoryCoordinates;

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GitHubClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    /// Personal access token sent as a bearer token
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseResponse {
    content: String,
}

/// Live [`LicenseLookup`] over HTTPS
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Build a client with the recommended GitHub headers and optional token
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );
        if let Some(token) = &config.token {
            let bearer = format!("Bearer {token}");
            let mut value = HeaderValue::from_str(&bearer).map_err(build_failed)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(build_failed)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// License endpoint for a repository
    pub fn license_url(&self, repository: &RepositoryCoordinates) -> String {
        format!(
            "{}/repos/{}/{}/license",
            self.api_url, repository.owner, repository.name
        )
    }
}

fn build_failed(err: impl fmt::Display) -> AcknowledgementsError {
    AcknowledgementsError::HttpClientBuildFailed {
        reason: err.to_string(),
    }
}

impl LicenseLookup for GitHubClient {
    async fn fetch_license(
        &self,
        repository: &RepositoryCoordinates,
    ) -> std::result::Result<String, LookupError> {
        let full_name = repository.full_name();
        let url = self.license_url(repository);
        debug!(%url, "requesting license");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                repository: full_name.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status {
                repository: full_name,
                status: status.as_u16(),
            });
        }

        let body: LicenseResponse = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse {
                repository: full_name.clone(),
                reason: e.to_string(),
            })?;

        decode_content(&body.content, &full_name)
    }
}

/// Decode GitHub's base64 `content` field into license text
///
/// GitHub wraps the encoded content with newlines, so whitespace is dropped first.
pub fn decode_content(
    content: &str,
    repository: &str,
) -> std::result::Result<String, LookupError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| LookupError::Base64 {
            repository: repository.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|_| LookupError::Utf8 {
        repository: repository.to_string(),
    })
}
