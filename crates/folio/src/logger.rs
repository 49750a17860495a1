//! File-based logger
//!
//! The TUI owns the terminal, so log records go to
//! `<cache dir>/folio/folio.log`. `FOLIO_LOG` sets the level (default `info`).

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

const LOG_FILE: &str = "folio.log";

/// Install the logger; returns the log file path when logging is active
pub fn init() -> Option<PathBuf> {
    let dir = folio_config::cache_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
        return None;
    }

    let path = dir.join(LOG_FILE);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("folio")
        .add_filter_allow_str("gh_client")
        .build();

    match WriteLogger::init(level_from_env(), config, file) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Cannot install logger: {}", e);
            None
        }
    }
}

fn level_from_env() -> LevelFilter {
    std::env::var("FOLIO_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
