//! Invocation configuration.
//!
//! The host supplies an [`InvocationContext`]: a plain key/value mapping that
//! may be incomplete. [`InvocationContext::validate`] turns it into a
//! [`DispatchConfig`] whose fields are all present and non-empty, or reports
//! the first missing key.

use std::collections::BTreeMap;

use crate::errors::ConfigError;
use crate::identifiers::{GitHubToken, RepositoryName, RepositoryOwner, WorkflowId};

/// Configuration key holding the GitHub API token.
pub const KEY_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Configuration key holding the target repository owner.
pub const KEY_GITHUB_REPO_OWNER: &str = "GITHUB_REPO_OWNER";

/// Configuration key holding the target repository name.
pub const KEY_GITHUB_REPO_NAME: &str = "GITHUB_REPO_NAME";

/// Configuration key holding the workflow file name or id.
pub const KEY_GITHUB_WORKFLOW_ID: &str = "GITHUB_WORKFLOW_ID";

const KNOWN_KEYS: [&str; 4] = [
    KEY_GITHUB_TOKEN,
    KEY_GITHUB_REPO_OWNER,
    KEY_GITHUB_REPO_NAME,
    KEY_GITHUB_WORKFLOW_ID,
];

// ---------------------------------------------------------------------------
// InvocationContext
// ---------------------------------------------------------------------------

/// Configuration values made available to one handler invocation.
///
/// Immutable once built. Keys other than the four known ones are ignored.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    values: BTreeMap<String, String>,
}

impl InvocationContext {
    /// Builds a context from arbitrary key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| KNOWN_KEYS.contains(&k.as_str()))
            .collect();
        Self { values }
    }

    /// Snapshots the known keys from the process environment.
    ///
    /// Unset or non-UTF-8 variables are left out; validation reports them.
    pub fn from_env() -> Self {
        Self::from_pairs(
            KNOWN_KEYS
                .iter()
                .filter_map(|key| std::env::var(key).ok().map(|value| (*key, value))),
        )
    }

    /// Returns the raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Validates the context into a [`DispatchConfig`].
    ///
    /// Keys are checked in the order token, owner, name, workflow; the first
    /// missing or blank one is reported.
    pub fn validate(&self) -> Result<DispatchConfig, ConfigError> {
        let token = self
            .get(KEY_GITHUB_TOKEN)
            .and_then(GitHubToken::new)
            .ok_or(ConfigError::Missing {
                key: KEY_GITHUB_TOKEN,
            })?;
        let owner = self
            .get(KEY_GITHUB_REPO_OWNER)
            .and_then(RepositoryOwner::new)
            .ok_or(ConfigError::Missing {
                key: KEY_GITHUB_REPO_OWNER,
            })?;
        let repo = self
            .get(KEY_GITHUB_REPO_NAME)
            .and_then(RepositoryName::new)
            .ok_or(ConfigError::Missing {
                key: KEY_GITHUB_REPO_NAME,
            })?;
        let workflow = self
            .get(KEY_GITHUB_WORKFLOW_ID)
            .and_then(WorkflowId::new)
            .ok_or(ConfigError::Missing {
                key: KEY_GITHUB_WORKFLOW_ID,
            })?;

        Ok(DispatchConfig {
            token,
            owner,
            repo,
            workflow,
        })
    }
}

impl std::fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if key == KEY_GITHUB_TOKEN {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

// ---------------------------------------------------------------------------
// DispatchConfig
// ---------------------------------------------------------------------------

/// Validated configuration for one workflow dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Token sent in the `Authorization` header.
    pub token: GitHubToken,
    /// Owner of the repository holding the workflow.
    pub owner: RepositoryOwner,
    /// Name of the repository holding the workflow.
    pub repo: RepositoryName,
    /// Workflow file name or id.
    pub workflow: WorkflowId,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
