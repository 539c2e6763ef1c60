//! Configuration loading for the book library.
//!
//! Settings live in `conf/config.toml` (or the path given with `--config`).
//! Any missing or invalid entries fall back to defaults so the window can
//! still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
