//! GitHub repository references parsed from user-supplied URLs

use crate::error::AppError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// https://github.com/{owner}/{repo}[.git][/...|?...|#...]
static GITHUB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/?#\s]+)/([^/?#\s]+?)(?:\.git)?/?(?:[/?#].*)?$").unwrap()
});

/// Owner and repository name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    owner: String,
    repo: String,
}

impl RepositoryReference {
    /// Parse a repository location such as `https://github.com/owner/repo`
    pub fn parse(location: &str) -> Result<Self, AppError> {
        let caps = GITHUB_URL_RE
            .captures(location.trim())
            .ok_or_else(|| AppError::invalid_reference(location))?;

        // "." and ".." would escape the repos/{owner}/{repo} API path
        let dots_only = |segment: &str| segment.chars().all(|c| c == '.');
        if dots_only(&caps[1]) || dots_only(&caps[2]) {
            return Err(AppError::invalid_reference(location));
        }

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Contents API URL for a file at the repository root
    pub fn contents_url(&self, api_base: &str, file: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            file
        )
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
