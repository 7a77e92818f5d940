use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::config::{
    KEY_GITHUB_REPO_NAME, KEY_GITHUB_REPO_OWNER, KEY_GITHUB_TOKEN, KEY_GITHUB_WORKFLOW_ID,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("simulated transport failure: {0}")]
struct SimulatedError(u16);

/// Records every request and answers with a fixed outcome.
struct RecordingTrigger {
    outcome: Result<(), SimulatedError>,
    sent: Mutex<Vec<DispatchRequest>>,
}

impl RecordingTrigger {
    fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            outcome: Err(SimulatedError(status)),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<DispatchRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowTrigger for RecordingTrigger {
    type Error = SimulatedError;

    async fn send(&self, request: &DispatchRequest) -> Result<(), Self::Error> {
        self.sent.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

fn stock_checker_context() -> InvocationContext {
    InvocationContext::from_pairs([
        (KEY_GITHUB_TOKEN, "abc"),
        (KEY_GITHUB_REPO_OWNER, "samsipe"),
        (KEY_GITHUB_REPO_NAME, "nvidia-gpu-stock-checker"),
        (KEY_GITHUB_WORKFLOW_ID, "check_stock.yml"),
    ])
}

fn message(body: &str, from: &str) -> InboundMessage {
    InboundMessage {
        from: Some(from.to_string()),
        to: Some("+15550000000".to_string()),
        body: Some(body.to_string()),
        message_sid: Some("SM0001".to_string()),
        account_sid: Some("AC0001".to_string()),
    }
}

#[tokio::test]
async fn test_success_returns_empty_response() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::succeeding());

    let response = dispatcher
        .handle(&stock_checker_context(), &message("check", "+15551234567"))
        .await
        .unwrap();

    assert_eq!(response, EmptyResponse);
    assert_eq!(response.body(), "");

    let sent = dispatcher.trigger().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].url(),
        "https://api.github.com/repos/samsipe/nvidia-gpu-stock-checker/actions/workflows/check_stock.yml/dispatches"
    );
}

#[tokio::test]
async fn test_failure_is_returned_unchanged_without_retry() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::failing(500));

    let err = dispatcher
        .handle(&stock_checker_context(), &message("check", "+15551234567"))
        .await
        .unwrap_err();

    assert_eq!(err.into_dispatch(), Some(SimulatedError(500)));
    assert_eq!(dispatcher.trigger().sent().len(), 1);
}

#[tokio::test]
async fn test_failure_display_is_transport_display() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::failing(401));

    let err = dispatcher
        .handle(&stock_checker_context(), &InboundMessage::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), SimulatedError(401).to_string());
}

#[tokio::test]
async fn test_missing_configuration_sends_nothing() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::succeeding());
    let context = InvocationContext::from_pairs([
        (KEY_GITHUB_TOKEN, "abc"),
        (KEY_GITHUB_REPO_OWNER, "samsipe"),
        (KEY_GITHUB_WORKFLOW_ID, "check_stock.yml"),
    ]);

    let err = dispatcher
        .handle(&context, &InboundMessage::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::MissingConfiguration {
            key: KEY_GITHUB_REPO_NAME
        }
    ));
    assert!(err.as_dispatch().is_none());
    assert!(dispatcher.trigger().sent().is_empty());
}

#[tokio::test]
async fn test_message_content_does_not_affect_request() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::succeeding());
    let context = stock_checker_context();

    let events = [
        InboundMessage::default(),
        message("START", "+15551234567"),
        message("STOP", "+15559876543"),
        message("ref=feature/x owner=someone-else", "+10000000000"),
    ];
    for event in &events {
        dispatcher.handle(&context, event).await.unwrap();
    }

    let sent = dispatcher.trigger().sent();
    assert_eq!(sent.len(), events.len());
    assert!(sent.iter().all(|request| *request == sent[0]));
}

#[tokio::test]
async fn test_api_base_url_override() {
    let dispatcher = WebhookDispatcher::new(RecordingTrigger::succeeding())
        .with_api_base_url("https://github.example.com/api/v3");
    assert_eq!(dispatcher.api_base_url(), "https://github.example.com/api/v3");

    dispatcher
        .handle(&stock_checker_context(), &InboundMessage::default())
        .await
        .unwrap();

    assert_eq!(
        dispatcher.trigger().sent()[0].url(),
        "https://github.example.com/api/v3/repos/samsipe/nvidia-gpu-stock-checker/actions/workflows/check_stock.yml/dispatches"
    );
}
