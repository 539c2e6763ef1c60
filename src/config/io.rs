use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read the config file, falling back to defaults when it is missing or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded config file");
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
            debug!(?cfg, "Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config TOML")?;
    let mut config = AppConfig::from(tables);
    config.clamp();
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("serializing config TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use std::path::PathBuf;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn sections_map_onto_flat_config() {
        let config = parse_config(
            r#"
[appearance]
theme = "day"

[storage]
path = "/tmp/books.json"

[library]
seed_defaults = false

[display]
newest_first = false

[behavior]
confirm_delete = false

[logging]
log_level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/books.json")));
        assert!(!config.seed_defaults);
        assert!(!config.newest_first);
        assert!(!config.confirm_delete);
        assert!(config.confirm_clear);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn window_size_is_clamped() {
        let config = parse_config("[appearance]\nwindow_width = 10.0\nwindow_height = 99999.0\n")
            .unwrap();
        assert_eq!(config.window_width, 480.0);
        assert_eq!(config.window_height, 2160.0);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.newest_first = false;
        config.storage_path = Some(PathBuf::from("books.json"));
        let text = serialize_config(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/book-library/config.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
