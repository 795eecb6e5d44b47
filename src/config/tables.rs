use super::defaults;
use super::models::{AppConfig, LogLevel, SliderOverride};
use serde::Deserialize;
use sitedeck_core::SliderKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    sliders: BTreeMap<SliderKind, SliderOverride>,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            content_path: tables.content.path,
            section_height: tables.layout.section_height,
            slide_gap: tables.layout.gap,
            track_padding: tables.layout.track_padding,
            sliders: tables.sliders,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContentConfig {
    #[serde(default = "defaults::default_content_path")]
    path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            path: defaults::default_content_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LayoutConfig {
    #[serde(default = "defaults::default_section_height")]
    section_height: f32,
    #[serde(default = "defaults::default_slide_gap")]
    gap: f32,
    #[serde(default = "defaults::default_track_padding")]
    track_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            section_height: defaults::default_section_height(),
            gap: defaults::default_slide_gap(),
            track_padding: defaults::default_track_padding(),
        }
    }
}
