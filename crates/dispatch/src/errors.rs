//! Error types for the dispatch domain.
//!
//! [`ConfigError`] is produced while validating an
//! [`InvocationContext`](crate::InvocationContext). [`DispatchError`] is what
//! [`WebhookDispatcher::handle`](crate::WebhookDispatcher::handle) returns:
//! either a configuration problem caught before any network call, or the
//! transport's own error carried through untouched.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// A configuration entry required to build a dispatch request is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The entry is absent, empty, or whitespace only.
    #[error("Missing configuration value: {key}")]
    Missing {
        /// The configuration key, e.g. `"GITHUB_TOKEN"`.
        key: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Handler errors
// ---------------------------------------------------------------------------

/// Failure outcome of a single handler invocation.
///
/// `E` is the [`WorkflowTrigger`](crate::WorkflowTrigger) implementation's
/// error type. It is never classified, translated, or retried.
#[derive(Debug, Error)]
pub enum DispatchError<E> {
    /// A configuration entry was missing. No request was sent.
    #[error("Missing configuration value: {key}")]
    MissingConfiguration {
        /// The configuration key that failed validation.
        key: &'static str,
    },

    /// The outbound request failed (network error or non-2xx response).
    #[error(transparent)]
    Dispatch(E),
}

impl<E> DispatchError<E> {
    /// Returns the transport error if this is a [`DispatchError::Dispatch`].
    pub fn as_dispatch(&self) -> Option<&E> {
        match self {
            Self::Dispatch(e) => Some(e),
            Self::MissingConfiguration { .. } => None,
        }
    }

    /// Consumes the error, returning the transport error if there is one.
    pub fn into_dispatch(self) -> Option<E> {
        match self {
            Self::Dispatch(e) => Some(e),
            Self::MissingConfiguration { .. } => None,
        }
    }
}

impl<E> From<ConfigError> for DispatchError<E> {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing { key } => Self::MissingConfiguration { key },
        }
    }
}
