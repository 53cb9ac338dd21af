//! The adapter binding local project context to remote operations.

use tracing::debug;

use crate::config::Credentials;
use crate::error::{HubcapError, Result};
use crate::github::{
    CreatePullRequest, CreateRepository, GITHUB_HOST, GitHubClient, Issue, PullRequest,
    PullRequestOps, QueryOps, Release, RepoOps, Repository, Status,
};
use crate::project::Project;

/// GitHub operations in the context of a local project.
///
/// Holds a project (optional, for credential-only use) and the resolved
/// credentials. Every operation builds a fresh authenticated client, issues
/// exactly one remote call, and returns its translated result; no state is
/// kept across calls.
pub struct GitHub {
    project: Option<Project>,
    credentials: Credentials,
}

impl GitHub {
    /// Create an adapter bound to a project.
    pub fn new(project: Project, credentials: Credentials) -> Self {
        Self {
            project: Some(project),
            credentials,
        }
    }

    /// Create an adapter with no repository context, for credential-only use.
    pub fn without_project(credentials: Credentials) -> Self {
        Self {
            project: None,
            credentials,
        }
    }

    /// The resolved credentials this adapter operates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn project(&self) -> Result<&Project> {
        self.project.as_ref().ok_or(HubcapError::MissingProject)
    }

    fn client(&self) -> Result<GitHubClient> {
        GitHubClient::new(self.credentials.token.as_str())
    }

    /// Fetch a single pull request of the configured project.
    pub fn pull_request(&self, number: u64) -> Result<PullRequest> {
        let project = self.project()?;
        let client = self.client()?;
        client.get_pull_request(&project.owner, &project.name, number)
    }

    /// Create a pull request from explicit branches; returns its web URL.
    pub fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<String> {
        let project = self.project()?;
        let client = self.client()?;
        let pr = client.create_pull_request(
            &project.owner,
            &project.name,
            CreatePullRequest::new(title, body, head, base),
        )?;

        Ok(pr.html_url)
    }

    /// Create a pull request converting an existing issue; returns its web URL.
    pub fn create_pull_request_for_issue(
        &self,
        base: &str,
        head: &str,
        issue: u64,
    ) -> Result<String> {
        let project = self.project()?;
        let client = self.client()?;
        let pr =
            client.create_pull_request_for_issue(&project.owner, &project.name, base, head, issue)?;

        Ok(pr.html_url)
    }

    /// Fetch a repository by owner and name.
    pub fn repository(&self, project: &Project) -> Result<Repository> {
        let client = self.client()?;
        client.get_repository(&project.owner, &project.name)
    }

    /// Whether a repository exists.
    ///
    /// This is a boolean probe, not a fallible operation: any failure of the
    /// underlying fetch reads as "does not exist".
    pub fn is_repository_exist(&self, project: &Project) -> bool {
        error_to_bool(self.repository(project))
    }

    /// Create a repository, under an organization when the target owner is
    /// not the authenticated user.
    pub fn create_repository(
        &self,
        project: &Project,
        description: &str,
        homepage: &str,
        is_private: bool,
    ) -> Result<Repository> {
        let client = self.client()?;
        self.create_repository_with(&client, project, description, homepage, is_private)
    }

    fn create_repository_with<C: RepoOps>(
        &self,
        client: &C,
        project: &Project,
        description: &str,
        homepage: &str,
        is_private: bool,
    ) -> Result<Repository> {
        let params = CreateRepository {
            name: project.name.clone(),
            description: description.to_owned(),
            homepage: homepage.to_owned(),
            private: is_private,
        };

        if project.owner != self.credentials.user {
            client.create_org_repository(&project.owner, &params)
        } else {
            client.create_user_repository(&params)
        }
    }

    /// Fork `owner/name` into the authenticated user's namespace.
    ///
    /// Fails without issuing the fork request when the user already has a
    /// repository of that name. `_no_remote` is accepted for callers that
    /// configure local remotes themselves; it has no effect in this layer.
    pub fn fork_repository(&self, name: &str, owner: &str, _no_remote: bool) -> Result<Repository> {
        let client = self.client()?;
        self.fork_repository_with(&client, name, owner)
    }

    fn fork_repository_with<C: RepoOps>(
        &self,
        client: &C,
        name: &str,
        owner: &str,
    ) -> Result<Repository> {
        match client.get_repository(&self.credentials.user, name) {
            Ok(existing) => Err(HubcapError::RepositoryExists {
                full_name: existing.full_name,
                host: GITHUB_HOST.to_owned(),
            }),
            Err(err) => {
                debug!("no existing fork target: {err}");
                client.fork_repository(owner, name)
            }
        }
    }

    /// List all releases of the configured project.
    pub fn releases(&self) -> Result<Vec<Release>> {
        let project = self.project()?;
        let client = self.client()?;
        client.releases(&project.owner, &project.name)
    }

    /// Fetch the current CI status for a commit SHA.
    ///
    /// A SHA with no statuses yet is a normal state, reported as `None`.
    pub fn ci_status(&self, sha: &str) -> Result<Option<Status>> {
        let project = self.project()?;
        let client = self.client()?;
        Self::ci_status_with(&client, project, sha)
    }

    fn ci_status_with<C: QueryOps>(
        client: &C,
        project: &Project,
        sha: &str,
    ) -> Result<Option<Status>> {
        let statuses = client.statuses(&project.owner, &project.name, sha)?;
        Ok(statuses.into_iter().next())
    }

    /// List all issues of the configured project.
    pub fn issues(&self) -> Result<Vec<Issue>> {
        let project = self.project()?;
        let client = self.client()?;
        client.issues(&project.owner, &project.name)
    }

    /// Compute the clone URL for a remote alias.
    ///
    /// The owner alias `"origin"` resolves to the authenticated user's login.
    /// Pure computation; no remote call.
    pub fn expand_remote_url(&self, owner: &str, name: &str, is_ssh: bool) -> Result<String> {
        let project = self.project()?;
        let owner = if owner == "origin" {
            self.credentials.user.as_str()
        } else {
            owner
        };

        Ok(project.git_url(name, owner, is_ssh))
    }
}

/// Narrow a fetch result into existence. Errors are intentionally discarded
/// at this boundary only; everywhere else they stay visible.
fn error_to_bool<T>(result: Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!("treating failed probe as absent: {err}");
            false
        }
    }
}
