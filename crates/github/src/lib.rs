//! GitHub Actions infrastructure adapter.
//!
//! Implements the [`dispatch::WorkflowTrigger`] port with [`reqwest`]: the
//! prebuilt [`dispatch::DispatchRequest`] is sent as-is, once. A network
//! failure comes back as the original [`reqwest::Error`]; any status outside
//! `2xx` comes back as [`GitHubError::Status`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. URL layout,
//! headers, and body are decided by the [`dispatch`] crate; only the HTTP
//! transport lives here.

use async_trait::async_trait;
use dispatch::{DispatchRequest, WorkflowTrigger};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// `User-Agent` sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("sms-trigger/", env!("CARGO_PKG_VERSION"));

/// Failure of a single dispatch call.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request never produced a response (DNS, connect, TLS, body encoding).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a status outside `2xx`.
    #[error("GitHub API returned {status}")]
    Status {
        /// The response status, e.g. `304 Not Modified` or `422 Unprocessable Entity`.
        status: StatusCode,
    },
}

impl GitHubError {
    /// Returns the response status if GitHub answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Http(err) => err.status(),
        }
    }
}

/// Sends workflow dispatch requests to the GitHub REST API.
///
/// Uses the client's default timeouts; there is no retry.
#[derive(Debug, Clone)]
pub struct GitHubActionsClient {
    http: Client,
}

impl GitHubActionsClient {
    /// Creates a client with a fresh connection pool.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Wraps an existing [`reqwest::Client`].
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WorkflowTrigger for GitHubActionsClient {
    type Error = GitHubError;

    async fn send(&self, request: &DispatchRequest) -> Result<(), Self::Error> {
        debug!(url = %request.url(), "Sending workflow dispatch request");

        let mut builder = self.http.post(request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.json(request.body()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status { status });
        }

        debug!(status = %status, "Workflow dispatch accepted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
