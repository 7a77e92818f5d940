//! The outbound port: something that can send a [`DispatchRequest`].

use async_trait::async_trait;

use crate::request::DispatchRequest;

/// Sends a built workflow dispatch request exactly once.
///
/// Implementations must not retry and must return the transport's own error
/// for any network failure or non-2xx response. The `github` crate provides
/// the production implementation.
#[async_trait]
pub trait WorkflowTrigger: Send + Sync {
    /// Transport error, returned to the caller unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends `request`, resolving once the remote side has answered.
    async fn send(&self, request: &DispatchRequest) -> Result<(), Self::Error>;
}
