//! Domain for the SMS workflow trigger.
//!
//! An inbound text message arrives, a GitHub Actions `workflow_dispatch`
//! request is built from configuration, sent once, and the outcome is mapped
//! back to the host. This crate holds everything except the transport.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! The [`WorkflowTrigger`] port is implemented by the `github` crate; the
//! `listener` crate hosts [`WebhookDispatcher`] behind an HTTP endpoint.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`RepositoryOwner`, `WorkflowId`, etc.) |
//! | [`config`] | `InvocationContext` and its validated form `DispatchConfig` |
//! | [`types`] | Inbound event and response types |
//! | [`request`] | `DispatchRequest` construction |
//! | [`errors`] | Configuration and dispatch error types |
//! | [`trigger`] | The `WorkflowTrigger` port |
//! | [`handler`] | `WebhookDispatcher` |

pub mod config;
pub mod errors;
pub mod handler;
pub mod identifiers;
pub mod request;
pub mod trigger;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{
    DispatchConfig, InvocationContext, KEY_GITHUB_REPO_NAME, KEY_GITHUB_REPO_OWNER,
    KEY_GITHUB_TOKEN, KEY_GITHUB_WORKFLOW_ID,
};
pub use errors::{ConfigError, DispatchError};
pub use handler::WebhookDispatcher;
pub use identifiers::{
    GitHubToken, GitRef, InvocationId, RepositoryName, RepositoryOwner, WorkflowId,
};
pub use request::{
    DispatchBody, DispatchRequest, ACCEPT_GITHUB_V3, CONTENT_TYPE_JSON, DEFAULT_GIT_REF,
    GITHUB_API_URL,
};
pub use trigger::WorkflowTrigger;
pub use types::{EmptyResponse, InboundMessage};
