// main.rs - Punch card loom viewer

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use punch_card::PunchCard;
use weave_display::{Config, WeaveApp};

#[derive(Parser, Debug)]
#[command(name = "weave-display")]
#[command(version, about = "Punch card to woven swatch demo")]
struct Cli {
    /// Card rows (at least 8)
    #[arg(long)]
    rows: Option<usize>,

    /// Card columns
    #[arg(long)]
    cols: Option<usize>,

    /// Text encoded into the card at startup
    #[arg(long, short = 't')]
    text: Option<String>,

    /// Directory for PNG/JSON exports
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Config file instead of ~/.config/weave-display/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    config.apply_overrides(cli.rows, cli.cols, cli.export_dir);

    let mut card = PunchCard::new(config.grid.rows, config.grid.cols)
        .context("Invalid card dimensions")?;
    if let Some(text) = &cli.text {
        card.encode_text(text);
    }
    log::info!("Starting with a {}x{} card", card.rows(), card.cols());

    let app = WeaveApp::new(card, &config);
    let size = [
        (app.layout.width() + 48.0).max(800.0),
        app.layout.height() + 200.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(
        "Punch Card Loom",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
