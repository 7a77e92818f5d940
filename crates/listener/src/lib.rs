//! Inbound SMS webhook receiver.
//!
//! Binds an HTTP server that the SMS provider calls for every received text
//! message, and runs one [`dispatch::WebhookDispatcher::handle`] invocation
//! per request.
//!
//! | Route | Behaviour |
//! |-------|-----------|
//! | `POST /sms` | Form-encoded inbound message (an undecodable body is treated as an empty message). `200` with an empty body on success; `500` with an empty body on failure. Neither sends a reply to the sender. |
//! | `GET /health` | Liveness check, always `200 ok`. |
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP framing and form decoding live here. The
//! [`dispatch`] crate sees only [`dispatch::InboundMessage`] and
//! [`dispatch::InvocationContext`].

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use dispatch::{InboundMessage, InvocationContext, WebhookDispatcher, WorkflowTrigger};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Errors raised while running the listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared, immutable state handed to every request.
///
/// The context is captured once at startup; every invocation sees the same
/// values.
pub struct ListenerState<T> {
    dispatcher: WebhookDispatcher<T>,
    context: InvocationContext,
}

impl<T: WorkflowTrigger> ListenerState<T> {
    /// Pairs a dispatcher with the context every invocation will receive.
    pub fn new(dispatcher: WebhookDispatcher<T>, context: InvocationContext) -> Self {
        Self {
            dispatcher,
            context,
        }
    }

    /// Returns the dispatcher that handles each inbound message.
    pub fn dispatcher(&self) -> &WebhookDispatcher<T> {
        &self.dispatcher
    }
}

/// Builds the router.
pub fn router<T>(state: Arc<ListenerState<T>>) -> Router
where
    T: WorkflowTrigger + 'static,
{
    Router::new()
        .route("/sms", post(receive_sms::<T>))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Binds `addr` and serves until `shutdown` resolves.
pub async fn serve<T, F>(
    addr: SocketAddr,
    state: Arc<ListenerState<T>>,
    shutdown: F,
) -> Result<(), ListenerError>
where
    T: WorkflowTrigger + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    info!(%addr, "Listening for inbound SMS webhooks");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ListenerError::Serve)?;

    info!("Listener stopped");
    Ok(())
}

async fn receive_sms<T>(
    State(state): State<Arc<ListenerState<T>>>,
    form: Result<Form<InboundMessage>, FormRejection>,
) -> Response
where
    T: WorkflowTrigger + 'static,
{
    // The message content never affects the dispatch, so an undecodable body
    // still triggers the workflow.
    let message = match form {
        Ok(Form(message)) => message,
        Err(rejection) => {
            warn!(error = %rejection, "Inbound message could not be decoded");
            InboundMessage::default()
        }
    };

    debug!(
        message_sid = message.message_sid.as_deref().unwrap_or(""),
        "Inbound message received"
    );

    // Both outcomes are already logged by the dispatcher.
    match state.dispatcher.handle(&state.context, &message).await {
        Ok(response) => (StatusCode::OK, response.body()).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
