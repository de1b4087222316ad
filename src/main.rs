//! InvestIQ - financial market data in your terminal or browser
//!
//! Queries third-party financial-data APIs (bonds, forex, stock quotes)
//! and presents the results through an interactive menu or a small web
//! UI (`investiq serve`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use investiq::cli::{Cli, Command};
use investiq::config::Settings;
use investiq::menu::Menu;
use investiq::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with menu output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command {
        Some(Command::Serve { port }) => {
            let state = web::AppState::from_settings(&settings)?;
            web::serve(state, port).await?;
        }
        None => {
            Menu::new(settings).run().await?;
        }
    }

    Ok(())
}
