//! # hubcap
//!
//! A thin adapter from local git-repository context to the GitHub API.
//!
//! This crate translates a local project (owner/name) and configured
//! credentials into single-shot remote calls:
//! - Fetching and creating pull requests (including converting issues)
//! - Fetching, creating and forking repositories
//! - Listing issues and releases, fetching CI statuses
//! - OAuth token acquisition, including two-factor flows
//!
//! Every operation is synchronous and short-lived: build a request from
//! local context plus arguments, issue one remote call, translate the
//! result. There is no cache, no retry, and no background work.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubcap::prelude::*;
//!
//! // Resolve credentials once, up front; prompts only for what's missing.
//! let credentials = Config::from_env().resolve(&TerminalPrompt)?;
//!
//! let gh = GitHub::new(Project::new("octocat", "hello-world"), credentials);
//!
//! if let Some(status) = gh.ci_status("4f00ba6")? {
//!     println!("CI is {}", status.state);
//! }
//!
//! let url = gh.create_pull_request("main", "feature", "Add feature", "")?;
//! println!("opened {url}");
//! # Ok::<(), hubcap::error::HubcapError>(())
//! ```
//!
//! ## Credential-only Use
//!
//! ```rust,no_run
//! use hubcap::prelude::*;
//!
//! let credentials = Config::from_env().resolve(&TerminalPrompt)?;
//! let gh = GitHub::without_project(credentials);
//! # Ok::<(), hubcap::error::HubcapError>(())
//! ```

pub mod config;
pub mod error;
pub mod github;
pub mod project;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Config, Credentials, Prompt, TerminalPrompt};
    pub use crate::error::{HubcapError, Result};
    pub use crate::github::{
        Authorization, CreatePullRequest, CreateRepository, GITHUB_HOST, GitHub, GitHubClient,
        Issue, OAUTH_APP_URL, PullRequest, PullRequestOps, QueryOps, Release, RepoOps, Repository,
        Status, find_or_create_token,
    };
    pub use crate::project::Project;
}

pub use prelude::*;
