//! Log setup.
//!
//! The terminal is taken over by the game screen, so logs only ever go to a
//! file. Without a log file no logger is installed and the `log` macros in
//! the core crates compile down to no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Build the log4rs config for a single file appender.
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid log configuration")
}

/// Install the global logger writing to `path`.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let config = file_config(path, level)?;
    log4rs::init_config(config).context("logger already initialised")?;
    Ok(())
}
