//! Entry point for the catalog page-flip viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the catalog manifest via `catalog`.
//! - Launch the GUI with the loaded pages and config.

mod app;
mod catalog;
mod config;
mod images;

use crate::app::run_app;
use crate::catalog::load_catalog;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let manifest_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    if env::var_os("RUST_LOG").is_none() {
        set_log_level(reload_handle, config.log_level.as_filter_str());
    }
    info!(
        path = %manifest_path.display(),
        level = %config.log_level,
        flip_ms = config.flip_duration_ms,
        preload = config.preload_neighbours,
        "Starting catalog viewer"
    );
    let catalog = load_catalog(&manifest_path)?;
    run_app(catalog, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow!("Usage: catalog-flipbook <path-to-catalog.json>"))?;

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; RUST_LOG takes precedence over config.log_level");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
