//! Newtype domain identifiers.
//!
//! Each configuration value that names something on GitHub is a distinct
//! newtype wrapping a `String`. This prevents accidentally interchanging, for
//! example, a [`RepositoryOwner`] with a [`RepositoryName`] when building the
//! dispatch URL.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty
            /// or whitespace only.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.trim().is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — repository and workflow identity
// ---------------------------------------------------------------------------

string_id! {
    /// The user or organisation that owns the target repository (e.g. `"samsipe"`).
    RepositoryOwner
}

string_id! {
    /// The target repository's name, without the owner prefix.
    RepositoryName
}

string_id! {
    /// A GitHub Actions workflow identifier: either the workflow file name
    /// (e.g. `"check_stock.yml"`) or its numeric id.
    WorkflowId
}

string_id! {
    /// The Git reference the workflow run is dispatched against (e.g. `"main"`).
    GitRef
}

impl GitRef {
    /// The reference every dispatch targets.
    pub fn main() -> Self {
        Self(crate::request::DEFAULT_GIT_REF.to_string())
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// A GitHub API token.
///
/// Has no `Display` impl and a redacted `Debug` so the value cannot end up in
/// log output by accident. The raw value is only reachable via
/// [`GitHubToken::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Creates a token, returning `None` if the value is empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.trim().is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the raw token value, unmodified.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GitHubToken(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single handler invocation (one inbound message).
///
/// Generated fresh for every call to
/// [`WebhookDispatcher::handle`](crate::WebhookDispatcher::handle) and
/// attached to its tracing span so the log lines of one invocation correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
