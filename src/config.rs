//! Command-line configuration.
//!
//! Every flag is optional; running `tetriz` bare plays at the default tick
//! rate with a clock-derived seed and no log file.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::Parser;
use log::LevelFilter;

use crate::types::{MAX_TICKS_PER_SECOND, TICKS_PER_SECOND};

#[derive(Debug, Clone, Parser)]
#[command(name = "tetriz")]
#[command(about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    /// Seed for the piece sequence (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Gravity ticks per second
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    pub tps: u32,

    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tps: TICKS_PER_SECOND,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tps == 0 {
            bail!("--tps must be at least 1");
        }
        if self.tps > MAX_TICKS_PER_SECOND {
            bail!(
                "--tps must be at most {} (got {})",
                MAX_TICKS_PER_SECOND,
                self.tps
            );
        }
        Ok(())
    }

    /// The configured seed, or one taken from the system clock.
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(1)
        })
    }
}
