//! SMS workflow trigger entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Load configuration** — read a `.env` file when present, then snapshot
//!    `GITHUB_TOKEN`, `GITHUB_REPO_OWNER`, `GITHUB_REPO_NAME`, and
//!    `GITHUB_WORKFLOW_ID` from the environment.
//! 2. **Wire observability** — see [`observability`].
//! 3. **Construct infrastructure** — a [`github::GitHubActionsClient`] behind
//!    a [`dispatch::WebhookDispatcher`].
//! 4. **Select run mode**:
//!    - `serve` — host the dispatcher behind the inbound SMS webhook.
//!    - `trigger` — run one invocation immediately and exit.

mod observability;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dispatch::{InboundMessage, InvocationContext, WebhookDispatcher, GITHUB_API_URL};
use github::GitHubActionsClient;
use listener::ListenerState;
use tracing::{error, info};

use crate::observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "sms-trigger", version, about = "Trigger a GitHub Actions workflow from an inbound text message")]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// GitHub REST API root (override for GitHub Enterprise).
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL, global = true)]
    api_base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Listen for inbound SMS webhooks and dispatch the workflow for each one.
    Serve {
        /// Address to bind the HTTP listener to.
        #[arg(long, env = "SMS_TRIGGER_BIND", default_value = "0.0.0.0:3000")]
        bind: SocketAddr,
    },
    /// Dispatch the workflow once, as if a message had been received.
    Trigger,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    check_env_file(dotenvy::dotenv())?;

    let cli = Cli::parse();
    let telemetry = observability::init(cli.log_format)?;

    let result = run(cli).await;
    if let Err(err) = &result {
        error!(error = %err, "sms-trigger exited with an error");
    }

    telemetry.shutdown();
    result
}

/// Accepts a missing `.env` file (the normal case in deployed environments)
/// but rejects one that exists and cannot be read or parsed.
fn check_env_file<T>(loaded: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("failed to load .env"),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = InvocationContext::from_env();
    let client = GitHubActionsClient::new().context("failed to build HTTP client")?;
    let dispatcher = WebhookDispatcher::new(client).with_api_base_url(cli.api_base_url);

    match cli.command {
        Command::Serve { bind } => {
            context
                .validate()
                .context("refusing to start with incomplete configuration")?;

            let state = Arc::new(ListenerState::new(dispatcher, context));
            listener::serve(bind, state, shutdown_signal()).await?;
        }
        Command::Trigger => {
            dispatcher
                .handle(&context, &InboundMessage::default())
                .await
                .context("workflow dispatch failed")?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!(error = %err, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
