use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_show_thumbnails")]
    pub show_thumbnails: bool,
    #[serde(default = "crate::config::defaults::default_flip_duration_ms")]
    pub flip_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_preload_neighbours")]
    pub preload_neighbours: bool,
    #[serde(default = "crate::config::defaults::default_key_reload")]
    pub key_reload: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default = "crate::config::defaults::default_fetch_timeout_secs")]
    pub fetch_timeout_secs: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            show_thumbnails: crate::config::defaults::default_show_thumbnails(),
            flip_duration_ms: crate::config::defaults::default_flip_duration_ms(),
            preload_neighbours: crate::config::defaults::default_preload_neighbours(),
            key_reload: crate::config::defaults::default_key_reload(),
            key_quit: crate::config::defaults::default_key_quit(),
            labels: Labels::default(),
            fetch_timeout_secs: crate::config::defaults::default_fetch_timeout_secs(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Flip duration, never shorter than one frame at 60 Hz.
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms.max(16))
    }

    pub fn fetch_timeout(&self) -> Duration {
        if self.fetch_timeout_secs.is_finite() && self.fetch_timeout_secs > 0.0 {
            Duration::from_secs_f32(self.fetch_timeout_secs)
        } else {
            Duration::from_secs_f32(crate::config::defaults::default_fetch_timeout_secs())
        }
    }
}

/// Display strings handed to the viewer already localized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct Labels {
    #[serde(default = "crate::config::defaults::default_label_previous")]
    pub previous: String,
    #[serde(default = "crate::config::defaults::default_label_next")]
    pub next: String,
    /// Template with `{current}` and `{total}` placeholders.
    #[serde(default = "crate::config::defaults::default_label_spread_position")]
    pub spread_position: String,
    #[serde(default = "crate::config::defaults::default_label_empty")]
    pub empty: String,
    #[serde(default = "crate::config::defaults::default_label_loading")]
    pub loading: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            previous: crate::config::defaults::default_label_previous(),
            next: crate::config::defaults::default_label_next(),
            spread_position: crate::config::defaults::default_label_spread_position(),
            empty: crate::config::defaults::default_label_empty(),
            loading: crate::config::defaults::default_label_loading(),
        }
    }
}

impl Labels {
    /// Render the position template for a 1-based `current` spread.
    pub fn spread_position(&self, current: usize, total: usize) -> String {
        self.spread_position
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
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
        f.write_str(self.as_filter_str())
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
