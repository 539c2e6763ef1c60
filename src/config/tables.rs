use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    library: LibraryConfig,
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    behavior: BehaviorConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            storage_path: tables.storage.path,
            seed_defaults: tables.library.seed_defaults,
            newest_first: tables.display.newest_first,
            confirm_delete: tables.behavior.confirm_delete,
            confirm_clear: tables.behavior.confirm_clear,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                window_width: config.window_width,
                window_height: config.window_height,
            },
            storage: StorageConfig {
                path: config.storage_path.clone(),
            },
            library: LibraryConfig {
                seed_defaults: config.seed_defaults,
            },
            display: DisplayConfig {
                newest_first: config.newest_first,
            },
            behavior: BehaviorConfig {
                confirm_delete: config.confirm_delete,
                confirm_clear: config.confirm_clear,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LibraryConfig {
    #[serde(default = "defaults::default_seed_defaults")]
    seed_defaults: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            seed_defaults: defaults::default_seed_defaults(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct DisplayConfig {
    #[serde(default = "defaults::default_newest_first")]
    newest_first: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            newest_first: defaults::default_newest_first(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct BehaviorConfig {
    #[serde(default = "defaults::default_confirm_delete")]
    confirm_delete: bool,
    #[serde(default = "defaults::default_confirm_clear")]
    confirm_clear: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            confirm_delete: defaults::default_confirm_delete(),
            confirm_clear: defaults::default_confirm_clear(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
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
