//! GitHub API integration bound to local project context.
//!
//! This module maps a local repository's [`Project`](crate::project::Project)
//! and resolved [`Credentials`](crate::config::Credentials) onto single-shot
//! calls against the GitHub API:
//! - Fetch and create pull requests (including converting an issue)
//! - Fetch, create and fork repositories
//! - List issues and releases, fetch CI statuses
//! - Acquire OAuth tokens (including two-factor flows)
//!
//! # Example
//!
//! ```rust,no_run
//! use hubcap::prelude::*;
//!
//! let credentials = Config::from_env().resolve(&TerminalPrompt)?;
//! let gh = GitHub::new(Project::new("octocat", "hello-world"), credentials);
//!
//! let url = gh.create_pull_request("main", "feature", "Add feature", "Description")?;
//! println!("{url}");
//! # Ok::<(), hubcap::error::HubcapError>(())
//! ```

mod adapter;
mod auth;
mod client;
mod pr;
mod queries;
mod repos;

pub use adapter::GitHub;
pub use auth::{AuthOps, Authorization, AuthorizationParams, find_or_create_token};
pub use client::GitHubClient;
pub use pr::{CreatePullRequest, PullRequest, PullRequestOps, PullRequestRef};
pub use queries::{Issue, QueryOps, Release, Status};
pub use repos::{CreateRepository, RepoOps, Repository};

/// Hostname of the remote code-hosting service.
pub const GITHUB_HOST: &str = "github.com";

/// URL identifying this application on OAuth authorization records.
pub const OAUTH_APP_URL: &str = "https://github.com/hubcap-rs/hubcap";
