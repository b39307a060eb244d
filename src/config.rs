use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Config {
    /// Defaults for the recognized game options
    #[serde(default)]
    pub(crate) game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("sidewinder").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Board width in cells, wall included
    pub(crate) width: u16,

    /// Board height in cells, wall included
    pub(crate) height: u16,

    /// Base horizontal frame rate
    pub(crate) fps: u32,

    /// Vertical/horizontal frame-rate ratio
    pub(crate) fps_factor: f64,

    /// Length gain permitted per growth-throttle reset
    pub(crate) growth_interval: usize,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            fps: consts::FPS_HORIZONTAL,
            fps_factor: consts::FPS_FACTOR,
            growth_interval: consts::GROWTH_INTERVAL,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
