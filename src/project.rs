//! Remote repository identity.

use crate::github::GITHUB_HOST;

/// Identifies a hosted repository by owner and name.
///
/// A `Project` is immutable after construction. It is normally derived from
/// the local repository's remote configuration by the caller; this crate only
/// consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub owner: String,
    pub name: String,
}

impl Project {
    /// Create a project from an owner and repository name.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Compute the clone URL for `owner/name`.
    ///
    /// Empty `name` or `owner` arguments fall back to this project's own
    /// fields. No remote call is made.
    pub fn git_url(&self, name: &str, owner: &str, is_ssh: bool) -> String {
        let name = if name.is_empty() { &self.name } else { name };
        let owner = if owner.is_empty() { &self.owner } else { owner };

        if is_ssh {
            format!("git@{GITHUB_HOST}:{owner}/{name}.git")
        } else {
            format!("https://{GITHUB_HOST}/{owner}/{name}.git")
        }
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
