use crate::consts;
use crate::game::{Field, FieldError};
use crate::render::Palette;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Dimensions & speed of the game
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Colors to draw things in
    #[serde(default)]
    pub(crate) colors: Palette,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
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

    /// Check the configuration for validity and convert it into the
    /// [`Settings`] that the game runs with
    pub(crate) fn settings(&self) -> Result<Settings, ConfigError> {
        let GameConfig {
            width,
            height,
            cell_size,
            tick_period,
        } = self.game;
        let field = Field::new(width, height, cell_size)?;
        if tick_period == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(Settings {
            field,
            tick_period: Duration::from_millis(tick_period),
            palette: self.colors,
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Width of the playing field, in field units
    pub(crate) width: u32,

    /// Height of the playing field, in field units
    pub(crate) height: u32,

    /// Side length of a grid cell, in field units
    pub(crate) cell_size: u32,

    /// Milliseconds between ticks
    pub(crate) tick_period: u64,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: consts::FIELD_WIDTH.unsigned_abs(),
            height: consts::FIELD_HEIGHT.unsigned_abs(),
            cell_size: consts::CELL_SIZE.unsigned_abs(),
            tick_period: u64::try_from(consts::TICK_PERIOD.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Validated configuration
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) field: Field,
    pub(crate) tick_period: Duration,
    pub(crate) palette: Palette,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            field: Field::default(),
            tick_period: consts::TICK_PERIOD,
            palette: Palette::default(),
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
    #[error("invalid playing field")]
    Field(#[from] FieldError),
    #[error("tick period must be nonzero")]
    ZeroTickPeriod,
}
