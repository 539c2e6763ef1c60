//! Entry point for the book library.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Open the store and restore the library.
//! - Launch the GUI around the restored library.

mod app;
mod config;

use crate::app::{AppStore, run_app};
use crate::config::{AppConfig, load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use library_core::{Controller, ControllerOptions, FileStore, MemoryStore};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

struct CliArgs {
    config_path: PathBuf,
    print_config: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_config {
        println!("{}", serialize_config(&config)?);
        return Ok(());
    }

    let (store, startup_notice) = open_store(&config);
    let controller = Controller::open(
        store,
        ControllerOptions {
            seed_defaults: config.seed_defaults,
        },
    );
    info!(
        books = controller.library().len(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting book library"
    );
    run_app(config, controller, startup_notice).context("Failed to start the GUI")?;
    Ok(())
}

/// Open the file store; an unreadable store file falls back to memory so the
/// window still opens, with a notice that nothing will be saved.
fn open_store(config: &AppConfig) -> (AppStore, Option<String>) {
    let path = config
        .storage_path
        .clone()
        .unwrap_or_else(FileStore::default_path);
    match FileStore::open(&path) {
        Ok(store) => {
            info!(path = %store.path().display(), "Using library store");
            let store: AppStore = Box::new(store);
            (store, None)
        }
        Err(err) => {
            warn!(path = %path.display(), "Falling back to in-memory store: {err}");
            let notice = format!("{err}. Changes will not be saved this session.");
            let store: AppStore = Box::new(MemoryStore::new());
            (store, Some(notice))
        }
    }
}

fn parse_args() -> Result<CliArgs> {
    parse_args_from(env::args().skip(1))
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        print_config: false,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("Usage: book-library [--config <path>] [--print-config]"))?;
                parsed.config_path = PathBuf::from(path);
            }
            "--print-config" => parsed.print_config = true,
            other => {
                return Err(anyhow!(
                    "Unknown argument {other}. Usage: book-library [--config <path>] [--print-config]"
                ));
            }
        }
    }
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; keeping its filter over config.log_level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        parse_args_from(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!args.print_config);
    }

    #[test]
    fn reads_config_path_and_print_flag() {
        let args = parse(&["--print-config", "-c", "other.toml"]).unwrap();
        assert_eq!(args.config_path, PathBuf::from("other.toml"));
        assert!(args.print_config);
    }

    #[test]
    fn rejects_unknown_or_incomplete_arguments() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }
}
