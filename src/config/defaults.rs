pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_show_thumbnails() -> bool {
    true
}

pub(crate) fn default_flip_duration_ms() -> u64 {
    600
}

pub(crate) fn default_preload_neighbours() -> bool {
    true
}

pub(crate) fn default_fetch_timeout_secs() -> f32 {
    15.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_reload() -> String {
    "r".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_label_previous() -> String {
    "Previous".to_string()
}

pub(crate) fn default_label_next() -> String {
    "Next".to_string()
}

pub(crate) fn default_label_spread_position() -> String {
    "Spread {current} of {total}".to_string()
}

pub(crate) fn default_label_empty() -> String {
    "This catalog has no pages.".to_string()
}

pub(crate) fn default_label_loading() -> String {
    "Loading...".to_string()
}
