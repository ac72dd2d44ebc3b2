//! `aarav health` -- query a running server's health endpoint.

use console::style;
use serde_json::Value;

/// Fetch and print the server's health status.
pub async fn check_health(base_url: &str) -> anyhow::Result<()> {
    let body: Value = reqwest::get(format!("{base_url}/api/health"))
        .await?
        .error_for_status()?
        .json()
        .await?;

    println!(
        "  {} {} ({})",
        style("\u{2713}").green(),
        body["message"].as_str().unwrap_or("server is up"),
        style(body["timestamp"].as_str().unwrap_or("-")).dim()
    );
    Ok(())
}
