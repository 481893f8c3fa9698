//! File logging. The terminal belongs to the TUI, so records go to
//! `<cache_dir>/edtable/edtable.log`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::Result;
use simplelog::{Config, ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::log_dir::get_log_dir;

pub const LOG_FILE_NAME: &str = "edtable.log";
pub const LOG_ENV_VAR: &str = "EDTABLE_LOG";

/// The CLI flag wins over the environment; unparseable values fall through.
pub fn resolve_level(flag: Option<&str>, env: Option<&str>) -> LevelFilter {
    flag.and_then(|s| LevelFilter::from_str(s).ok())
        .or_else(|| env.and_then(|s| LevelFilter::from_str(s).ok()))
        .unwrap_or(LevelFilter::Info)
}

pub fn init_logging(level: LevelFilter) -> Result<PathBuf> {
    let path = get_log_dir()?.join(LOG_FILE_NAME);
    init_logging_at(&path, level)?;
    Ok(path)
}

pub fn init_logging_at(path: &Path, level: LevelFilter) -> Result<()> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, logger_config(), log_file)?;
    log::info!("logging at {level} to {}", path.display());
    Ok(())
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build()
}
