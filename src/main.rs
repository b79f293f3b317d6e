//! freshservice - list recent tickets from a FreshService account
//!
//! A small smoke-test binary: it loads configuration, fetches one page of
//! tickets and prints a line per ticket.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHSERVICE_DOMAIN`: account sub-domain
//! - `FRESHSERVICE_API_KEY`: agent API key
//!
//! # Usage
//!
//! ```bash
//! FRESHSERVICE_DOMAIN=acme FRESHSERVICE_API_KEY=xxx ./freshservice [per_page]
//! ```

use std::time::Duration;

use anyhow::{Context as _, Result};
use tracing_subscriber::{fmt, EnvFilter};

use freshservice::models::ListTicketsOptions;
use freshservice::{Config, Context, Freshservice};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the listing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshservice=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let per_page: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("per_page must be a positive integer")?,
        None => 10,
    };

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(domain = %config.domain(), "Configuration loaded");

    let fs = Freshservice::new(&config).context("Failed to create FreshService client")?;
    let fs = fs.with_context(Context::background().with_timeout(Duration::from_secs(120)));

    let opts = ListTicketsOptions::new().with_page(1, per_page);
    let tickets = fs
        .tickets()
        .list(Some(&opts))
        .await
        .context("Failed to list tickets")?
        .into_data()
        .tickets;

    tracing::info!(count = tickets.len(), "Fetched tickets");

    for ticket in tickets {
        println!(
            "#{:<8} {:<9} {:<7} {}",
            ticket.id,
            ticket.status_label(),
            ticket.priority_label(),
            ticket.subject.as_deref().unwrap_or("(No subject)")
        );
    }

    Ok(())
}
