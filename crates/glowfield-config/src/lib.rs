//! Configuration for the glowfield terminal background.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! field is optional; a missing file yields the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Frame rate used when none is configured.
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("fps must be between 1 and 240, got {0}")]
    InvalidFps(u32),
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Frames painted per second.
    pub fps: u32,
    /// Draw the title and key help over the background.
    pub overlay: bool,
    /// Where log records go; logging is off without one.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            overlay: true,
            log_file: None,
        }
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub fps: Option<u32>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "glowfield").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, or from [`default_path`](Self::default_path) when `None`.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::parse(&text, &path)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML, suitable for writing to the config file.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(fps) = overrides.fps {
            self.fps = fps;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        Ok(())
    }

    /// Time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
