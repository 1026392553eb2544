//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use glowfield_config::Overrides;
use log::LevelFilter;

/// A terminal full of drifting violet particles.
#[derive(Debug, Parser)]
#[command(name = "glowfield", version, about)]
pub struct Cli {
    /// Read settings from this file instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frames per second (1-240).
    #[arg(long)]
    pub fps: Option<u32>,

    /// Append log records to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Settings that take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            fps: self.fps,
            log_file: self.log_file.clone(),
        }
    }

    /// Level forced by `-v` flags, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
