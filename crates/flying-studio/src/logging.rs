//! File logging for the terminal preview.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const LOG_FILE: &str = "flying-studio.log";

/// Install `env_logger` writing to the data directory.
///
/// The terminal belongs to the UI, so nothing is logged to stderr. If the
/// log file cannot be opened, logging stays disabled. Returns the log path.
pub fn init() -> Option<PathBuf> {
    let dir = flying_config::data_dir().ok()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;
    Some(path)
}
