//! List activities for a tenant
//!
//! Reads credentials from the environment:
//!
//!   TARGET_TENANT=acme TARGET_APIKEY=... TARGET_TOKEN=... \
//!     cargo run --example list_activities
//!
//! Set RUST_LOG=target_sdk=debug to see each request.

use target_sdk::{ListOptions, TargetClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("target_sdk=info")),
        )
        .init();

    let client = TargetClient::from_env()?;

    let page = client
        .get_activities(ListOptions::new().limit(20).sort_by("-modifiedAt"))
        .await?;

    println!("{} activities in total", page.body["total"]);
    if let Some(activities) = page.body["activities"].as_array() {
        for activity in activities {
            println!(
                "  #{:<8} {:<4} {:<12} {}",
                activity["id"],
                activity["type"].as_str().unwrap_or("?"),
                activity["state"].as_str().unwrap_or("?"),
                activity["name"].as_str().unwrap_or(""),
            );
        }
    }

    Ok(())
}
