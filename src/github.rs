use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// The slice of a GitHub Actions `pull_request` event payload we read.
#[derive(Deserialize, Debug)]
pub struct GitHubEvent {
    pub pull_request: Option<PullRequest>,
}

#[derive(Deserialize, Debug)]
pub struct PullRequest {
    #[serde(default)]
    pub merged: bool,
    pub head: Head,
}

#[derive(Deserialize, Debug)]
pub struct Head {
    #[serde(rename = "ref")]
    pub branch: String,
}

impl GitHubEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("GitHub event payload is not valid JSON")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read GitHub event payload {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Branch name of the pull request head, if this is a pull request event.
    pub fn head_branch(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .map(|pr| pr.head.branch.as_str())
            .filter(|branch| !branch.is_empty())
    }

    pub fn is_merged(&self) -> bool {
        self.pull_request.as_ref().map_or(false, |pr| pr.merged)
    }
}
