//! Interactive chat loop against a running Aarav server.
//!
//! Each submitted message walks a small state machine:
//! `Idle -> Sending -> (Success | Failed) -> Idle`. While `Sending`, the
//! prompt is replaced by a busy spinner (the send affordance), exactly
//! one request is issued, and both outcome branches clear the spinner
//! before rendering, so the loop always returns to a usable `Idle`.
//!
//! Failures render a fixed apologetic line; raw error text never reaches
//! the chat view (it goes to the debug log instead).

use std::time::Duration;

use console::style;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use uuid::Uuid;

use super::renderer::render_message;

/// Rendered when the request cannot be completed, whatever the cause.
const CONNECTION_FALLBACK: &str =
    "\u{1F64F} I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// Success body of the chat endpoint.
#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

/// Outcome of one send.
enum SendOutcome {
    /// The server answered; carry the assistant text.
    Success(String),
    /// Transport error or non-OK status.
    Failed,
}

/// Send one message to the chat endpoint.
///
/// Exactly one request per call; any transport failure or non-success
/// status collapses to `Failed`.
async fn send_message(
    http: &reqwest::Client,
    base_url: &str,
    session_id: &str,
    message: &str,
) -> SendOutcome {
    let result = http
        .post(format!("{base_url}/api/chat"))
        .json(&serde_json::json!({ "message": message, "sessionId": session_id }))
        .send()
        .await;

    let response = match result {
        Ok(r) => r,
        Err(e) => {
            debug!(error = %e, "chat request transport failure");
            return SendOutcome::Failed;
        }
    };

    if !response.status().is_success() {
        debug!(status = %response.status(), "chat request rejected");
        return SendOutcome::Failed;
    }

    match response.json::<ChatReply>().await {
        Ok(reply) => SendOutcome::Success(reply.response),
        Err(e) => {
            debug!(error = %e, "chat response body unreadable");
            SendOutcome::Failed
        }
    }
}

/// Run the interactive chat loop.
///
/// Unless `--session` is given, a fresh UUID session id is generated for
/// this invocation, so separate terminals hold separate conversations.
pub async fn run_chat_loop(base_url: &str, session: Option<String>) -> anyhow::Result<()> {
    let session_id = session.unwrap_or_else(|| Uuid::now_v7().to_string());
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(90))
        .build()?;

    println!();
    println!(
        "  {} Chatting with {} ({})",
        style("\u{1FAD4}").bold(),
        style("Aarav").cyan().bold(),
        style(&session_id).dim()
    );
    println!(
        "  {}",
        style("Type a message and press Enter. Ctrl+D to leave.").dim()
    );
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    // Idle: prompt shown, input enabled.
    loop {
        stdout.write_all(b"  you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            // EOF (Ctrl+D)
            println!();
            println!("  {}", style("Namaste!").dim());
            return Ok(());
        };

        let message = line.trim().to_string();
        if message.is_empty() {
            // Guard: empty input never leaves Idle.
            continue;
        }

        // Idle -> Sending: input is consumed (the compose line is gone),
        // the busy spinner takes over the prompt.
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("static spinner template"),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let outcome = send_message(&http, base_url, &session_id, &message).await;

        // Both branches clear the spinner before rendering, so the loop
        // always comes back to Idle with the prompt usable.
        spinner.finish_and_clear();

        match outcome {
            SendOutcome::Success(reply) => {
                println!("  {} {}", style("aarav>").cyan().bold(), indent(&render_message(&reply)));
            }
            SendOutcome::Failed => {
                println!("  {} {}", style("aarav>").cyan().bold(), CONNECTION_FALLBACK);
            }
        }
        println!();
    }
}

/// Indent continuation lines so multi-line replies align under the label.
fn indent(text: &str) -> String {
    text.replace('\n', "\n         ")
}
