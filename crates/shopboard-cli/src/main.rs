//! Shopboard CLI Application
//!
//! Terminal kiosk for the workshop board: runs the refresh/rotation loop or
//! prints a single snapshot.

mod args;
mod kiosk;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use kiosk::Kiosk;
use log::info;
use renderer::TerminalRenderer;
use shopboard_core::{BoardAdapter, EnvCredentials, TrelloClient};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        title,
        api_base_url,
        command,
    } = Args::parse();

    let client = TrelloClient::new(api_base_url).context("Failed to initialize board client")?;
    let adapter = BoardAdapter::new(client, EnvCredentials, title);
    let renderer = TerminalRenderer::new(!no_color);

    info!("Shopboard started");

    match command.unwrap_or_default() {
        Run(args) => Kiosk::new(adapter, renderer).run(args).await,
        Snapshot { json } => Kiosk::new(adapter, renderer).snapshot(json).await,
    }
}
