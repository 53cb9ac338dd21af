//! Auxiliary read-only queries: releases, CI statuses, issues.

use serde::Deserialize;

use crate::error::Result;
use crate::github::GitHubClient;

/// A published release.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub html_url: String,
    pub draft: bool,
    pub prerelease: bool,
    pub body: Option<String>,
}

/// A commit status reported by CI.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: u64,
    pub state: String,
    pub target_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub context: String,
}

/// An issue on the issue tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub body: Option<String>,
}

/// Read-only queries against a repository.
pub trait QueryOps {
    /// List all releases. An empty list is a valid result.
    fn releases(&self, owner: &str, name: &str) -> Result<Vec<Release>>;

    /// List all statuses for a commit SHA, most recent first.
    fn statuses(&self, owner: &str, name: &str, sha: &str) -> Result<Vec<Status>>;

    /// List all issues.
    fn issues(&self, owner: &str, name: &str) -> Result<Vec<Issue>>;
}

impl QueryOps for GitHubClient {
    fn releases(&self, owner: &str, name: &str) -> Result<Vec<Release>> {
        let endpoint = format!("/repos/{}/{}/releases", owner, name);
        self.get(&endpoint)
    }

    fn statuses(&self, owner: &str, name: &str, sha: &str) -> Result<Vec<Status>> {
        let endpoint = format!("/repos/{}/{}/statuses/{}", owner, name, sha);
        self.get(&endpoint)
    }

    fn issues(&self, owner: &str, name: &str) -> Result<Vec<Issue>> {
        let endpoint = format!("/repos/{}/{}/issues", owner, name);
        self.get(&endpoint)
    }
}
