//! GitHub API client.

use http::header::HeaderName;
use octocrab::Octocrab;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::error::{HubcapError, Result};

/// Client for interacting with the GitHub API.
///
/// Wraps an [`Octocrab`] instance together with a runtime that bridges its
/// async API into this crate's blocking call-per-invocation model. A fresh
/// client is constructed for every adapter operation; nothing is cached
/// across calls.
pub struct GitHubClient {
    pub(crate) octocrab: Octocrab,
    runtime: Runtime,
}

impl GitHubClient {
    /// Create a client authenticated with a personal access token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let octocrab = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self {
            octocrab,
            runtime: Runtime::new()?,
        })
    }

    /// Create a client authenticated with basic credentials.
    ///
    /// Used only by token acquisition; every other operation authenticates
    /// with a token. A supplied one-time passcode is attached to each request
    /// as the `X-GitHub-OTP` header.
    pub fn with_basic_auth(user: &str, password: &str, otp: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().basic_auth(user.to_owned(), password.to_owned());
        if let Some(code) = otp {
            builder = builder.add_header(HeaderName::from_static("x-github-otp"), code.to_owned());
        }

        Ok(Self {
            octocrab: builder.build()?,
            runtime: Runtime::new()?,
        })
    }

    /// Run a future to completion on this client's runtime.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Make a GET request to the GitHub API.
    pub(crate) fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!("GET {endpoint}");
        self.block_on(self.octocrab.get(endpoint, None::<&()>))
            .map_err(|e| HubcapError::GitHub {
                message: format!("GET {endpoint} failed: {e}"),
            })
    }

    /// Make a POST request to the GitHub API.
    pub(crate) fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T> {
        debug!("POST {endpoint}");
        self.block_on(self.octocrab.post(endpoint, body))
            .map_err(|e| HubcapError::GitHub {
                message: format!("POST {endpoint} failed: {e}"),
            })
    }
}
