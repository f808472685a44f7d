#![forbid(unsafe_code)]

mod api;
mod config;
mod constants;
mod gui;
mod model;
mod net;
mod stats;

use anyhow::Result;
use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::AppConfig;

/// Desktop client for the HRMS Lite backend
#[derive(Parser, Debug)]
#[command(name = "hrms-lite", version, about)]
struct Args {
    /// Override the API base URL from config file and environment
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let mut config = AppConfig::load();
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
        config.validate_and_clamp();
    }
    info!(api_base_url = %config.api_base_url, "config loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    gui::run_gui(config, runtime.handle().clone())
}
