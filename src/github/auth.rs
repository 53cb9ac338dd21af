//! OAuth token acquisition.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::{GitHubClient, OAUTH_APP_URL};

/// Note attached to authorizations created by this application.
const OAUTH_APP_NOTE: &str = "hubcap";

/// An OAuth authorization record issued by the remote host.
#[derive(Debug, Clone, Deserialize)]
pub struct Authorization {
    pub id: u64,
    pub token: String,
    pub note: Option<String>,
    pub note_url: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Request body for creating an authorization.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationParams {
    pub scopes: Vec<String>,
    pub note: String,
    pub note_url: String,
}

/// Authorization management, available on basic-authenticated clients.
pub trait AuthOps {
    /// List the caller's existing authorizations.
    fn authorizations(&self) -> Result<Vec<Authorization>>;

    /// Create a new authorization.
    fn create_authorization(&self, params: &AuthorizationParams) -> Result<Authorization>;
}

impl AuthOps for GitHubClient {
    fn authorizations(&self) -> Result<Vec<Authorization>> {
        self.get("/authorizations")
    }

    fn create_authorization(&self, params: &AuthorizationParams) -> Result<Authorization> {
        self.post("/authorizations", Some(params))
    }
}

/// Exchange basic credentials for an OAuth token.
///
/// An existing authorization created by this application (matched by note
/// URL) is reused; otherwise a new one scoped to repository access is
/// created. A supplied one-time passcode is attached as a request header.
/// Failures from the listing or creation call surface unchanged; a
/// two-factor challenge is an ordinary error for the caller to interpret
/// and re-prompt on.
pub fn find_or_create_token(user: &str, password: &str, otp: Option<&str>) -> Result<String> {
    let client = GitHubClient::with_basic_auth(user, password, otp)?;
    token_for(&client)
}

fn token_for<C: AuthOps>(client: &C) -> Result<String> {
    let auths = client.authorizations()?;
    if let Some(auth) = auths
        .into_iter()
        .find(|auth| auth.note_url.as_deref() == Some(OAUTH_APP_URL))
    {
        return Ok(auth.token);
    }

    let params = AuthorizationParams {
        scopes: vec!["repo".into()],
        note: OAUTH_APP_NOTE.into(),
        note_url: OAUTH_APP_URL.into(),
    };
    let created = client.create_authorization(&params)?;

    Ok(created.token)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::HubcapError;

    struct StubAuthClient {
        auths: Vec<Authorization>,
        created: Cell<u32>,
    }

    impl StubAuthClient {
        fn with_auths(auths: Vec<Authorization>) -> Self {
            Self {
                auths,
                created: Cell::new(0),
            }
        }
    }

    impl AuthOps for StubAuthClient {
        fn authorizations(&self) -> Result<Vec<Authorization>> {
            Ok(self.auths.clone())
        }

        fn create_authorization(&self, params: &AuthorizationParams) -> Result<Authorization> {
            self.created.set(self.created.get() + 1);
            assert_eq!(params.scopes, vec!["repo".to_owned()]);
            assert_eq!(params.note_url, OAUTH_APP_URL);
            Ok(authorization(99, "tok_created", &params.note_url))
        }
    }

    fn authorization(id: u64, token: &str, note_url: &str) -> Authorization {
        Authorization {
            id,
            token: token.into(),
            note: Some(OAUTH_APP_NOTE.into()),
            note_url: Some(note_url.into()),
            scopes: vec!["repo".into()],
        }
    }

    #[test]
    fn reuses_authorization_matching_app_url() {
        let client = StubAuthClient::with_auths(vec![
            authorization(1, "tok_other", "https://example.com/elsewhere"),
            authorization(2, "tok_ours", OAUTH_APP_URL),
        ]);

        let token = token_for(&client).unwrap();

        assert_eq!(token, "tok_ours");
        assert_eq!(client.created.get(), 0);
    }

    #[test]
    fn creates_authorization_when_none_matches() {
        let client = StubAuthClient::with_auths(vec![authorization(
            1,
            "tok_other",
            "https://example.com/elsewhere",
        )]);

        let token = token_for(&client).unwrap();

        assert_eq!(token, "tok_created");
        assert_eq!(client.created.get(), 1);
    }

    #[test]
    fn listing_failure_surfaces_unchanged() {
        struct FailingClient;

        impl AuthOps for FailingClient {
            fn authorizations(&self) -> Result<Vec<Authorization>> {
                Err(HubcapError::GitHub {
                    message: "Must specify two-factor authentication OTP code.".into(),
                })
            }

            fn create_authorization(&self, _: &AuthorizationParams) -> Result<Authorization> {
                panic!("creation should not be attempted");
            }
        }

        let err = token_for(&FailingClient).unwrap_err();
        assert!(err.to_string().contains("two-factor"));
    }
}
