//! `warbond`: terminal front-end for the equipment catalog and war status.
mod app;
mod cli;
mod config;
mod glyph;
mod logging;
mod render;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config)?;

    tracing::debug!(?config, "client configuration");

    let app = App::new(config.content_source(), cli.json);
    let output = app.execute(cli.command).await?;
    println!("{output}");

    Ok(())
}
