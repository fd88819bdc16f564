use super::defaults;
use super::models::{AppConfig, Labels, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`: settings grouped by concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    viewer: ViewerConfig,
    #[serde(default)]
    labels: Labels,
    #[serde(default)]
    network: NetworkConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            show_thumbnails: tables.appearance.show_thumbnails,
            flip_duration_ms: tables.viewer.flip_duration_ms,
            preload_neighbours: tables.viewer.preload_neighbours,
            key_reload: tables.viewer.key_reload,
            key_quit: tables.viewer.key_quit,
            labels: tables.labels,
            fetch_timeout_secs: tables.network.fetch_timeout_secs,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_show_thumbnails")]
    show_thumbnails: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            show_thumbnails: defaults::default_show_thumbnails(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ViewerConfig {
    #[serde(default = "defaults::default_flip_duration_ms")]
    flip_duration_ms: u64,
    #[serde(default = "defaults::default_preload_neighbours")]
    preload_neighbours: bool,
    #[serde(default = "defaults::default_key_reload")]
    key_reload: String,
    #[serde(default = "defaults::default_key_quit")]
    key_quit: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: defaults::default_flip_duration_ms(),
            preload_neighbours: defaults::default_preload_neighbours(),
            key_reload: defaults::default_key_reload(),
            key_quit: defaults::default_key_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct NetworkConfig {
    #[serde(default = "defaults::default_fetch_timeout_secs")]
    fetch_timeout_secs: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: defaults::default_fetch_timeout_secs(),
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
        Self {
            log_level: defaults::default_log_level(),
        }
    }
}
