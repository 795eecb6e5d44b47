pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_content_path() -> String {
    "content/site.json".to_string()
}

pub(crate) fn default_section_height() -> f32 {
    360.0
}

pub(crate) fn default_slide_gap() -> f32 {
    24.0
}

pub(crate) fn default_track_padding() -> f32 {
    32.0
}
