mod api;
mod bucket;

use std::io::Write;

use api::gamma::{self, TokenPair};
use tracing_subscriber::EnvFilter;

/// Write the three output lines: slug, up token id, down token id.
fn report(out: &mut impl Write, slug: &str, tokens: &TokenPair) -> std::io::Result<()> {
    writeln!(out, "{}", slug)?;
    writeln!(out, "{}", tokens.up)?;
    writeln!(out, "{}", tokens.down)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the slug and token ids.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let slug = bucket::current_slug();
    let tokens = gamma::fetch_event_tokens(&slug).await?;

    report(&mut std::io::stdout(), &slug, &tokens)?;

    Ok(())
}
