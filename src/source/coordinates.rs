//! GitHub repository coordinates

use std::fmt;

const GITHUB_HOST: &str = "github.com";

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinates {
    pub owner: String,
    pub name: String,
}

impl RepositoryCoordinates {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extract coordinates from a source location, or `None` if it is not a GitHub repository
    pub fn from_location(location: &str) -> Option<Self> {
        let location = location.trim();
        let rest = after_github_host(location)?;

        let mut segments = rest.split('/').filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let name = segments.next()?;
        let name = name.strip_suffix(".git").unwrap_or(name);

        if name.is_empty() {
            return None;
        }

        Some(Self::new(owner, name))
    }

    /// `owner/name`, as used in GitHub API paths
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The path part following `github.com/` or `github.com:`
///
/// The host must be `github.com` or a subdomain of it, matched ASCII case-insensitively.
fn after_github_host(location: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets identical to `location`
    let lowered = location.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(found) = lowered[search_from..].find(GITHUB_HOST) {
        let start = search_from + found;
        let end = start + GITHUB_HOST.len();
        let boundary_ok = start == 0
            || matches!(lowered.as_bytes()[start - 1], b'/' | b'@' | b'.');
        let separator = lowered.as_bytes().get(end).copied();

        if boundary_ok && matches!(separator, Some(b'/' | b':')) {
            return Some(&location[end + 1..]);
        }
        search_from = end;
    }

    None
}
