#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use artfolio_core::InteractionConfig;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};

/// Global interaction config, set from the command line
static CONFIG: OnceLock<InteractionConfig> = OnceLock::new();

/// Global start page, set from the command line
static START_PAGE: OnceLock<StartPage> = OnceLock::new();

/// Get the interaction config (loaded from --config or default)
pub fn get_config() -> InteractionConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Get the page the window opens on
pub fn get_start_page() -> StartPage {
    START_PAGE.get().copied().unwrap_or_default()
}

/// Page shown when the window opens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    #[default]
    Portfolio,
    Contact,
}

/// Artfolio - illustration portfolio
#[derive(Parser, Debug)]
#[command(name = "artfolio")]
#[command(about = "Artfolio - an illustration portfolio with a contact desk")]
struct Args {
    /// JSON file overriding interaction timings and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open first
    #[arg(short, long, value_enum, default_value_t = StartPage::Portfolio)]
    page: StartPage,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: &std::path::Path) -> anyhow::Result<InteractionConfig> {
    let config = InteractionConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    tracing::info!("Loaded interaction config from {:?}", path);
    Ok(config)
}

fn main() {
    let args = Args::parse();

    if let Err(e) = artfolio_core::logging::init(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match args.config.as_deref() {
        Some(path) => load_config(path).unwrap_or_else(|e| {
            tracing::warn!("Using default interaction config: {:#}", e);
            InteractionConfig::default()
        }),
        None => InteractionConfig::default(),
    };

    let _ = CONFIG.set(config);
    let _ = START_PAGE.set(args.page);

    tracing::info!("Starting Artfolio on the {:?} page", args.page);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Artfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
