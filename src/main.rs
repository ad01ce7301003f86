mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use eframe::egui;

use ggplot::config::{DEFAULT_TITLE, LoaderConfig, MountConfig, default_log_path};

use app::GgPlotApp;
use state::AppState;

/// GG diagram of a smartphone accelerometer log recorded in a vehicle.
#[derive(Parser, Debug)]
#[command(name = "ggplot", version, about)]
struct Cli {
    /// Drive log to open (defaults to data/trento_levico.csv)
    log: Option<PathBuf>,

    /// JSON file with pitch_deg / yaw_deg / roll_deg / gravity
    #[arg(long, value_name = "JSON")]
    mount: Option<PathBuf>,

    /// Plot title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Write the corrected series to FILE and exit without opening a window
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Column separator of the input log
    #[arg(long, default_value_t = ';')]
    delimiter: char,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }
    let loader = LoaderConfig {
        delimiter: cli.delimiter as u8,
    };

    let mount = match &cli.mount {
        Some(path) => MountConfig::from_json_file(path)
            .with_context(|| format!("reading mount config {}", path.display()))?,
        None => MountConfig::default(),
    };

    let log_path = cli.log.unwrap_or_else(default_log_path);
    let mut state = AppState::new(mount, loader, cli.title);
    state.open(&log_path)?;

    if let Some(out) = &cli.export {
        return state.export(out);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GG Plot",
        options,
        Box::new(move |_cc| Ok(Box::new(GgPlotApp::new(state)))),
    )
    // eframe::Error is not Sync, so it cannot be wrapped with `.context`.
    .map_err(|e| anyhow::anyhow!("plot backend error: {e}"))
}
