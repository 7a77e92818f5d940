//! Construction of the workflow dispatch request.
//!
//! The request shape is fixed: `POST` to
//! `{base}/repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches` with
//! body `{"ref":"main"}` and three headers. Only the identity values and the
//! token vary.

use serde::Serialize;

use crate::config::DispatchConfig;
use crate::identifiers::GitRef;

/// Public GitHub REST API root.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Reference every workflow run is dispatched against.
pub const DEFAULT_GIT_REF: &str = "main";

/// `Accept` header value selecting the v3 REST media type.
pub const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// `Content-Type` header value for the JSON body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// JSON body of a workflow dispatch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchBody {
    #[serde(rename = "ref")]
    pub git_ref: GitRef,
}

/// A fully built workflow dispatch request, ready for a
/// [`WorkflowTrigger`](crate::WorkflowTrigger) to send.
#[derive(Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    url: String,
    authorization: String,
    body: DispatchBody,
}

impl DispatchRequest {
    /// Builds the request against the public GitHub API.
    pub fn new(config: &DispatchConfig) -> Self {
        Self::with_base_url(GITHUB_API_URL, config)
    }

    /// Builds the request against `base_url` (GitHub Enterprise, or a test
    /// double). A trailing `/` on the base is ignored.
    pub fn with_base_url(base_url: &str, config: &DispatchConfig) -> Self {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            base_url.trim_end_matches('/'),
            config.owner,
            config.repo,
            config.workflow
        );

        Self {
            url,
            authorization: format!("token {}", config.token.expose()),
            body: DispatchBody {
                git_ref: GitRef::main(),
            },
        }
    }

    /// HTTP method of the request.
    pub fn method(&self) -> &'static str {
        "POST"
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request body.
    pub fn body(&self) -> &DispatchBody {
        &self.body
    }

    /// Header name/value pairs, in send order.
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Accept", ACCEPT_GITHUB_V3),
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", CONTENT_TYPE_JSON),
        ]
    }
}

impl std::fmt::Debug for DispatchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchRequest")
            .field("url", &self.url)
            .field("authorization", &"token <redacted>")
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
