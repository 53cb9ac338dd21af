//! Error types for GitHub adapter operations.

use thiserror::Error;

/// The main error type for GitHub adapter operations.
#[derive(Error, Debug)]
pub enum HubcapError {
    #[error("GitHub client error: {0}")]
    Client(#[from] octocrab::Error),

    #[error("GitHub API error: {message}")]
    GitHub { message: String },

    #[error("Error creating fork: {full_name} exists on {host}")]
    RepositoryExists { full_name: String, host: String },

    #[error("no project is bound to this client")]
    MissingProject,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for GitHub adapter operations.
pub type Result<T> = std::result::Result<T, HubcapError>;
