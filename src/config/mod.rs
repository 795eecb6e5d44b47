//! Configuration loading for the site showcase.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the window can still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel};
