use serde::Deserialize;
use sitedeck_core::{BreakpointTable, SliderKind, SliderPreset};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

/// Bounds for a configured auto-advance interval.
pub(crate) const MIN_SLIDER_INTERVAL: Duration = Duration::from_millis(500);
pub(crate) const MAX_SLIDER_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
    pub content_path: String,
    pub section_height: f32,
    pub slide_gap: f32,
    pub track_padding: f32,
    pub sliders: BTreeMap<SliderKind, SliderOverride>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            content_path: crate::config::defaults::default_content_path(),
            section_height: crate::config::defaults::default_section_height(),
            slide_gap: crate::config::defaults::default_slide_gap(),
            track_padding: crate::config::defaults::default_track_padding(),
            sliders: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Built-in preset for `kind` with any `[sliders.<kind>]` overrides applied.
    pub fn slider_preset(&self, kind: SliderKind) -> SliderPreset {
        let mut preset = kind.preset();
        let Some(overrides) = self.sliders.get(&kind) else {
            return preset;
        };
        if let Some(secs) = overrides.interval_secs {
            if let Some(interval) = slider_interval(kind, secs) {
                preset.interval = interval;
            }
        }
        if let Some(threshold) = overrides.visibility_threshold {
            preset.visibility_threshold = threshold;
        }
        if let Some(on_mount) = overrides.autoplay_on_mount {
            preset.autoplay_on_mount = on_mount;
        }
        if let Some(table) = &overrides.breakpoints {
            preset.table = table.clone();
        }
        preset
    }
}

fn slider_interval(kind: SliderKind, secs: f32) -> Option<Duration> {
    if !(secs.is_finite() && secs > 0.0) {
        warn!(slider = %kind, secs, "Ignoring non-positive slider interval");
        return None;
    }
    let requested = Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX);
    let interval = requested.clamp(MIN_SLIDER_INTERVAL, MAX_SLIDER_INTERVAL);
    if interval != requested {
        warn!(
            slider = %kind,
            secs,
            applied_ms = interval.as_millis() as u64,
            "Slider interval out of range; clamped"
        );
    }
    Some(interval)
}

/// Per-slider settings; anything left out keeps the built-in preset.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SliderOverride {
    #[serde(default)]
    pub interval_secs: Option<f32>,
    #[serde(default)]
    pub visibility_threshold: Option<f32>,
    #[serde(default)]
    pub autoplay_on_mount: Option<bool>,
    #[serde(default)]
    pub breakpoints: Option<BreakpointTable>,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
