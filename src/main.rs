//! Third-party automation sample.
//!
//! Reads the identity and faction from `HAVEN_*` environment variables and
//! runs the scenarios selected by `HAVEN_SCENARIOS`.

use anyhow::Context;
use integrations_haven::{HavenConfig, Runner, Scenario};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = HavenConfig::from_env().context("Failed to load Haven configuration")?;
    let selection = std::env::var("HAVEN_SCENARIOS").ok();
    let scenarios = Scenario::parse_selection(selection.as_deref())
        .context("Failed to parse HAVEN_SCENARIOS")?;

    tracing::info!(
        base_url = %config.base_url,
        faction = %config.sample_faction(),
        scenarios = ?scenarios,
        "Starting Haven automation sample"
    );

    let mut runner = Runner::new(config);
    if let Err(e) = runner.run(&scenarios).await {
        println!("{}", e.first_non_aggregate().message());
    }

    println!("Press any key to close..");
    if io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
