//! Inbound event and response types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound event
// ---------------------------------------------------------------------------

/// A received text message, as posted by the SMS provider's webhook.
///
/// Field names follow the provider's form encoding (`From`, `To`, `Body`, ...).
/// Every field is optional. None of them influence the dispatch request; they
/// are kept for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundMessage {
    /// Sender's phone number.
    #[serde(default)]
    pub from: Option<String>,
    /// Number the message was sent to.
    #[serde(default)]
    pub to: Option<String>,
    /// Message text.
    #[serde(default)]
    pub body: Option<String>,
    /// Provider-assigned message identifier.
    #[serde(default)]
    pub message_sid: Option<String>,
    /// Provider account the message was received on.
    #[serde(default)]
    pub account_sid: Option<String>,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Successful handler outcome.
///
/// Carries nothing: the triggered run's id is not reported back, and the
/// message sender gets no reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyResponse;

impl EmptyResponse {
    /// The reply body handed to the host: always the empty string.
    pub fn body(&self) -> &'static str {
        ""
    }
}

impl std::fmt::Display for EmptyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.body())
    }
}
