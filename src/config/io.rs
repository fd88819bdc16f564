use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the config at `path`, falling back to defaults when the file is
/// missing or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn tables_flatten_into_config() {
        let cfg = parse_config(
            r#"
            [appearance]
            theme = "night"
            show_thumbnails = false

            [viewer]
            flip_duration_ms = 250

            [labels]
            next = "Weiter"

            [logging]
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme, ThemeMode::Night);
        assert!(!cfg.show_thumbnails);
        assert_eq!(cfg.flip_duration_ms, 250);
        assert_eq!(cfg.labels.next, "Weiter");
        assert_eq!(cfg.labels.previous, "Previous");
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert!(cfg.preload_neighbours);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.toml"));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn position_label_fills_placeholders() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.labels.spread_position(2, 4), "Spread 2 of 4");
    }

    #[test]
    fn flip_duration_has_a_floor() {
        let mut cfg = AppConfig::default();
        cfg.flip_duration_ms = 0;
        assert_eq!(cfg.flip_duration().as_millis(), 16);
    }
}
