//! Entry point for the site slider showcase.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or the given path).
//! - Launch the GUI, which loads slider content in the background.

mod app;
mod config;
mod content;

use crate::app::run_app;
use crate::config::{LogLevel, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config_path = parse_args()?;
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level);
    info!(
        config = %config_path.display(),
        content = %config.content_path,
        level = %config.log_level,
        "Starting site showcase"
    );
    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(PathBuf::from(DEFAULT_CONFIG_PATH));
    };

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!(
            "Config not found: {} (usage: sitedeck [config.toml])",
            path.display()
        ));
    }
    Ok(path)
}

/// Installs a compact fmt subscriber. `RUST_LOG` wins; otherwise the default
/// level applies until the config has been read.
fn init_tracing() -> ReloadHandle {
    let (filter, handle) = reload::Layer::new(startup_filter());
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_line_number(true)
                .with_filter(filter),
        )
        .init();
    debug!("Tracing subscriber installed");
    handle
}

fn startup_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_filter_str()))
}

fn set_log_level(handle: &ReloadHandle, level: LogLevel) {
    if env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        debug!(%level, "RUST_LOG is set; ignoring configured log level");
        return;
    }
    match handle.reload(EnvFilter::new(level.as_filter_str())) {
        Ok(()) => info!(%level, "Log level set from config"),
        Err(err) => warn!(%level, "Could not apply configured log level: {err}"),
    }
}
