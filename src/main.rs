use anyhow::{Context, Result};
use normal_confidence::{evaluate, format_score, read_observation, LOG_ENV};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries only the score
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let observation = read_observation(io::stdin().lock()).context("reading observation from stdin")?;
    let score = evaluate(observation);
    tracing::debug!(observation, score, "evaluated observation");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_score(score))?;
    Ok(())
}
