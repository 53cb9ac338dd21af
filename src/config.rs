//! Credential configuration and resolution.
//!
//! `Config` holds whatever the caller already knows about the authenticated
//! user; [`Config::resolve`] turns it into an immutable [`Credentials`] value
//! exactly once, prompting for anything missing. Adapter methods only ever
//! see the resolved value, so no interactive side effects or hidden mutation
//! happen inside query methods.

use std::io::{self, Write};

use crate::error::{HubcapError, Result};
use crate::github::find_or_create_token;

/// Partially-known credential configuration.
///
/// Field values take precedence over the `GITHUB_USER` / `GITHUB_TOKEN`
/// environment variables, which take precedence over interactive prompting.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub user: Option<String>,
    pub token: Option<String>,
}

/// Resolved, immutable credentials for the authenticated user.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub token: String,
}

/// Interactive input source for credential resolution.
pub trait Prompt {
    fn username(&self) -> Result<String>;
    fn password(&self) -> Result<String>;
    fn two_factor_code(&self) -> Result<String>;
}

impl Config {
    /// Build a config from the `GITHUB_USER` and `GITHUB_TOKEN` environment
    /// variables, leaving unset values to be prompted for at resolution time.
    pub fn from_env() -> Self {
        Self {
            user: std::env::var("GITHUB_USER").ok(),
            token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }

    /// Resolve this config into credentials, prompting for missing values.
    ///
    /// When no token is known, the user's password is prompted and exchanged
    /// for an OAuth token. A two-factor challenge from that exchange is
    /// answered by prompting for the one-time code and retrying the exchange
    /// once with the code attached.
    pub fn resolve(&self, prompt: &dyn Prompt) -> Result<Credentials> {
        self.resolve_with(prompt, |user, password, code| {
            find_or_create_token(user, password, code)
        })
    }

    fn resolve_with<F>(&self, prompt: &dyn Prompt, acquire_token: F) -> Result<Credentials>
    where
        F: Fn(&str, &str, Option<&str>) -> Result<String>,
    {
        let user = match &self.user {
            Some(user) => user.clone(),
            None => prompt.username()?,
        };

        let token = match &self.token {
            Some(token) => token.clone(),
            None => {
                let password = prompt.password()?;
                match acquire_token(&user, &password, None) {
                    Ok(token) => token,
                    Err(err) if requires_two_factor(&err) => {
                        let code = prompt.two_factor_code()?;
                        acquire_token(&user, &password, Some(code.as_str()))?
                    }
                    Err(err) => return Err(err),
                }
            }
        };

        Ok(Credentials { user, token })
    }
}

fn requires_two_factor(err: &HubcapError) -> bool {
    let message = err.to_string();
    message.contains("two-factor") || message.contains("OTP")
}

/// Prompt implementation that reads from the controlling terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn username(&self) -> Result<String> {
        read_line("github username: ")
    }

    fn password(&self) -> Result<String> {
        // Echo control is best-effort; a non-tty stdin has nothing to hide.
        set_echo(false);
        let password = read_line("github password (never stored): ");
        set_echo(true);
        eprintln!();
        password
    }

    fn two_factor_code(&self) -> Result<String> {
        read_line("two-factor authentication code: ")
    }
}

fn read_line(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn set_echo(on: bool) {
    let flag = if on { "echo" } else { "-echo" };
    let _ = std::process::Command::new("stty").arg(flag).status();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct ScriptedPrompt {
        username: &'static str,
        password: &'static str,
        code: &'static str,
    }

    impl Prompt for ScriptedPrompt {
        fn username(&self) -> Result<String> {
            Ok(self.username.to_owned())
        }

        fn password(&self) -> Result<String> {
            Ok(self.password.to_owned())
        }

        fn two_factor_code(&self) -> Result<String> {
            Ok(self.code.to_owned())
        }
    }

    struct PanicPrompt;

    impl Prompt for PanicPrompt {
        fn username(&self) -> Result<String> {
            panic!("username should not be prompted");
        }

        fn password(&self) -> Result<String> {
            panic!("password should not be prompted");
        }

        fn two_factor_code(&self) -> Result<String> {
            panic!("two-factor code should not be prompted");
        }
    }

    #[test]
    fn known_values_resolve_without_prompting() {
        let config = Config {
            user: Some("octocat".into()),
            token: Some("tok_123".into()),
        };

        let credentials = config
            .resolve_with(&PanicPrompt, |_, _, _| {
                panic!("token acquisition should not run")
            })
            .unwrap();

        assert_eq!(credentials.user, "octocat");
        assert_eq!(credentials.token, "tok_123");
    }

    #[test]
    fn missing_token_prompts_and_exchanges_password() {
        let config = Config::default();
        let prompt = ScriptedPrompt {
            username: "octocat",
            password: "hunter2",
            code: "",
        };

        let credentials = config
            .resolve_with(&prompt, |user, password, code| {
                assert_eq!(user, "octocat");
                assert_eq!(password, "hunter2");
                assert!(code.is_none());
                Ok("tok_fresh".into())
            })
            .unwrap();

        assert_eq!(credentials.user, "octocat");
        assert_eq!(credentials.token, "tok_fresh");
    }

    #[test]
    fn two_factor_challenge_retries_with_code() {
        let config = Config {
            user: Some("octocat".into()),
            token: None,
        };
        let prompt = ScriptedPrompt {
            username: "octocat",
            password: "hunter2",
            code: "424242",
        };
        let attempts = Cell::new(0);

        let credentials = config
            .resolve_with(&prompt, |_, _, code| {
                attempts.set(attempts.get() + 1);
                match code {
                    None => Err(HubcapError::GitHub {
                        message: "Must specify two-factor authentication OTP code.".into(),
                    }),
                    Some(code) => {
                        assert_eq!(code, "424242");
                        Ok("tok_otp".into())
                    }
                }
            })
            .unwrap();

        assert_eq!(attempts.get(), 2);
        assert_eq!(credentials.token, "tok_otp");
    }

    #[test]
    fn non_two_factor_failure_propagates() {
        let config = Config {
            user: Some("octocat".into()),
            token: None,
        };
        let prompt = ScriptedPrompt {
            username: "octocat",
            password: "wrong",
            code: "",
        };

        let err = config
            .resolve_with(&prompt, |_, _, _| {
                Err(HubcapError::GitHub {
                    message: "Bad credentials".into(),
                })
            })
            .unwrap_err();

        assert!(err.to_string().contains("Bad credentials"));
    }
}
