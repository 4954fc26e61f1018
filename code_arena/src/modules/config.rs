use anyhow::{Context, Result};
use code_arena_libs::HttpArenaClient;
use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "https://code-backend-three.vercel.app/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Backend connection settings, read from the environment (and `.env`).
///
/// - `ARENA_API_URL`: backend base url
/// - `ARENA_SESSION_TOKEN`: value of the session cookie, needed for per-user endpoints
/// - `ARENA_TIMEOUT_SECS`: request timeout in seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub api_url: String,
    pub session_token: Option<String>,
    pub timeout: Duration,
}

impl ArenaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("ARENA_API_URL").unwrap_or_else(|| {
            tracing::warn!(
                "ARENA_API_URL environment variable is not set. Default value `{}` will be used.",
                DEFAULT_API_URL
            );
            String::from(DEFAULT_API_URL)
        });

        let session_token = lookup("ARENA_SESSION_TOKEN").filter(|token| !token.is_empty());
        if session_token.is_none() {
            tracing::info!("ARENA_SESSION_TOKEN is not set. Requests will be sent without a session.");
        }

        let timeout = match lookup("ARENA_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().with_context(|| {
                let message = format!("ARENA_TIMEOUT_SECS must be a number of seconds, got `{}`", value);
                tracing::error!(message);
                message
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(ArenaConfig {
            api_url,
            session_token,
            timeout: Duration::from_secs(timeout),
        })
    }

    pub fn connect(&self) -> Result<HttpArenaClient> {
        tracing::debug!("Connect to backend {}", self.api_url);
        HttpArenaClient::new(&self.api_url, self.session_token.as_deref(), self.timeout)
            .with_context(|| {
                let message = format!(
                    "couldn't create backend client. check the value of ARENA_API_URL (`{}`).",
                    self.api_url
                );
                tracing::error!(message);
                message
            })
    }
}
