//! The webhook dispatcher: one inbound message in, one workflow dispatch out.

use tracing::{error, info};

use crate::config::InvocationContext;
use crate::errors::DispatchError;
use crate::identifiers::InvocationId;
use crate::request::{DispatchRequest, GITHUB_API_URL};
use crate::trigger::WorkflowTrigger;
use crate::types::{EmptyResponse, InboundMessage};

/// Turns an inbound text message into a GitHub Actions workflow dispatch.
///
/// Stateless across invocations: each [`handle`](Self::handle) call validates
/// its own context, builds its own request, and sends it once.
#[derive(Debug)]
pub struct WebhookDispatcher<T> {
    trigger: T,
    api_base_url: String,
}

impl<T: WorkflowTrigger> WebhookDispatcher<T> {
    /// Creates a dispatcher that targets the public GitHub API through `trigger`.
    pub fn new(trigger: T) -> Self {
        Self {
            trigger,
            api_base_url: GITHUB_API_URL.to_string(),
        }
    }

    /// Points the dispatcher at a different API root.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Returns the API root requests are built against.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the underlying trigger.
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// Handles one inbound message.
    ///
    /// The message content is ignored; the same request is sent for every
    /// message given the same `context`. A missing configuration value fails
    /// before anything is sent. A transport failure is returned as
    /// [`DispatchError::Dispatch`] holding the trigger's error as-is.
    #[tracing::instrument(
        name = "dispatch_workflow",
        skip_all,
        fields(
            invocation_id = %InvocationId::new_random(),
            message_sid = event.message_sid.as_deref().unwrap_or(""),
        )
    )]
    pub async fn handle(
        &self,
        context: &InvocationContext,
        event: &InboundMessage,
    ) -> Result<EmptyResponse, DispatchError<T::Error>> {
        let config = match context.validate() {
            Ok(config) => config,
            Err(err) => {
                error!(error = %err, "Error triggering GitHub workflow");
                return Err(err.into());
            }
        };

        let request = DispatchRequest::with_base_url(&self.api_base_url, &config);

        match self.trigger.send(&request).await {
            Ok(()) => {
                info!(
                    owner = %config.owner,
                    repo = %config.repo,
                    workflow = %config.workflow,
                    "Successfully triggered GitHub workflow"
                );
                Ok(EmptyResponse)
            }
            Err(err) => {
                error!(
                    owner = %config.owner,
                    repo = %config.repo,
                    workflow = %config.workflow,
                    error = %err,
                    "Error triggering GitHub workflow"
                );
                Err(DispatchError::Dispatch(err))
            }
        }
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
