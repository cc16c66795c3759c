//! Demonstration client for the pricing API.
//!
//! Walks through the service surface: prices a forward, a call, and a put,
//! then repeats the forward request to show the `cached` flag flipping from
//! `false` to `true` within the TTL window, and finishes with a request the
//! service rejects.
//!
//! Run the server first, then: `demo-client --base-url http://localhost:8000`

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use serde_json::{json, Value};

/// Demonstration client for the closedform pricing API
#[derive(Parser, Debug)]
#[command(name = "demo-client")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the pricing server
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,
}

async fn post_and_print(client: &Client, url: &str, payload: &Value) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("POST {}", url);
    println!("payload: {}", payload);

    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .with_context(|| format!("request to {url} failed; is the server running?"))?;

    let status = response.status();
    let body: Value = response.json().await.context("non-JSON response body")?;

    println!("status:  {}", status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();

    let forward_url = format!("{}/price/forward", args.base_url);
    let option_url = format!("{}/price/european-option", args.base_url);

    let forward_payload = json!({"S0": 100.0, "K": 95.0, "r": 0.02, "T": 0.5});

    // First call computes, second is a cache hit within the TTL
    post_and_print(&client, &forward_url, &forward_payload).await?;
    post_and_print(&client, &forward_url, &forward_payload).await?;

    post_and_print(
        &client,
        &option_url,
        &json!({"S0": 100.0, "K": 95.0, "r": 0.01, "sigma": 0.2, "T": 0.5, "type": "call"}),
    )
    .await?;

    post_and_print(
        &client,
        &option_url,
        &json!({"S0": 100.0, "K": 105.0, "r": 0.01, "sigma": 0.25, "T": 1.0, "type": "put"}),
    )
    .await?;

    // Rejected: negative spot
    post_and_print(
        &client,
        &forward_url,
        &json!({"S0": -10.0, "K": 95.0, "r": 0.02, "T": 0.5}),
    )
    .await?;

    Ok(())
}
