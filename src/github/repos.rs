//! GitHub repository operations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::GitHubClient;

/// Repository information from the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub default_branch: String,
    #[serde(default)]
    pub fork: bool,
    pub description: Option<String>,
    pub homepage: Option<String>,
    #[serde(rename = "private")]
    pub is_private: bool,
}

/// Request body for creating a repository.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepository {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub private: bool,
}

/// Repository operations.
pub trait RepoOps {
    /// Get a specific repository.
    fn get_repository(&self, owner: &str, name: &str) -> Result<Repository>;

    /// Create a repository under the authenticated user.
    fn create_user_repository(&self, params: &CreateRepository) -> Result<Repository>;

    /// Create a repository under an organization.
    fn create_org_repository(&self, org: &str, params: &CreateRepository) -> Result<Repository>;

    /// Request a fork of `owner/name` into the authenticated user's namespace.
    fn fork_repository(&self, owner: &str, name: &str) -> Result<Repository>;
}

impl RepoOps for GitHubClient {
    fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let endpoint = format!("/repos/{}/{}", owner, name);
        self.get(&endpoint)
    }

    fn create_user_repository(&self, params: &CreateRepository) -> Result<Repository> {
        self.post("/user/repos", Some(params))
    }

    fn create_org_repository(&self, org: &str, params: &CreateRepository) -> Result<Repository> {
        let endpoint = format!("/orgs/{}/repos", org);
        self.post(&endpoint, Some(params))
    }

    fn fork_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let endpoint = format!("/repos/{}/{}/forks", owner, name);
        self.post(&endpoint, None::<&()>)
    }
}
