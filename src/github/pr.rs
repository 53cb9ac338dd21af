//! Pull request operations using octocrab.

use octocrab::models::pulls::PullRequest as OctocrabPR;
use serde::Serialize;

use crate::error::{HubcapError, Result};
use crate::github::GitHubClient;

/// A pull request on GitHub.
#[derive(Debug, Clone)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub html_url: String,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    pub head: PullRequestRef,
    pub base: PullRequestRef,
    pub draft: bool,
    pub merged: bool,
}

impl From<OctocrabPR> for PullRequest {
    fn from(pr: OctocrabPR) -> Self {
        Self {
            id: pr.id.0,
            number: pr.number,
            html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
            state: pr.state.map(|s| format!("{:?}", s).to_lowercase()).unwrap_or_default(),
            title: pr.title.unwrap_or_default(),
            body: pr.body,
            head: PullRequestRef {
                ref_name: pr.head.ref_field,
                sha: pr.head.sha,
            },
            base: PullRequestRef {
                ref_name: pr.base.ref_field,
                sha: pr.base.sha,
            },
            draft: pr.draft.unwrap_or(false),
            merged: pr.merged.unwrap_or(false),
        }
    }
}

/// A reference (branch) in a pull request.
#[derive(Debug, Clone)]
pub struct PullRequestRef {
    pub ref_name: String,
    pub sha: String,
}

/// Request body for creating a pull request from explicit branches.
#[derive(Debug, Clone)]
pub struct CreatePullRequest {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
}

impl CreatePullRequest {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            head: head.into(),
            base: base.into(),
        }
    }
}

/// Request body for converting an existing issue into a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct IssueConversionParams {
    pub issue: u64,
    pub head: String,
    pub base: String,
}

/// Pull request operations.
pub trait PullRequestOps {
    /// Get a specific pull request.
    fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest>;

    /// Create a new pull request.
    fn create_pull_request(&self, owner: &str, repo: &str, pr: CreatePullRequest)
    -> Result<PullRequest>;

    /// Create a pull request that converts an existing issue.
    fn create_pull_request_for_issue(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        issue: u64,
    ) -> Result<PullRequest>;
}

impl PullRequestOps for GitHubClient {
    fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest> {
        let pr = self
            .block_on(self.octocrab.pulls(owner, repo).get(number))
            .map_err(|e| HubcapError::GitHub {
                message: format!("Failed to get pull request #{}: {}", number, e),
            })?;

        Ok(PullRequest::from(pr))
    }

    fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr: CreatePullRequest,
    ) -> Result<PullRequest> {
        let created = self
            .block_on(
                self.octocrab
                    .pulls(owner, repo)
                    .create(pr.title.as_str(), pr.head.as_str(), pr.base.as_str())
                    .body(pr.body.as_str())
                    .send(),
            )
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains("422") || msg.contains("Validation Failed") {
                    HubcapError::GitHub {
                        message: format!(
                            "Failed to create PR (branch may not exist or PR already exists): {}",
                            msg
                        ),
                    }
                } else {
                    HubcapError::GitHub {
                        message: format!("Failed to create PR: {}", msg),
                    }
                }
            })?;

        Ok(PullRequest::from(created))
    }

    fn create_pull_request_for_issue(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        issue: u64,
    ) -> Result<PullRequest> {
        // The issue-conversion form has no octocrab builder; use the raw
        // endpoint with the alternate request body.
        let params = IssueConversionParams {
            issue,
            head: head.to_owned(),
            base: base.to_owned(),
        };
        let endpoint = format!("/repos/{}/{}/pulls", owner, repo);
        let created: OctocrabPR = self.post(&endpoint, Some(&params))?;

        Ok(PullRequest::from(created))
    }
}
