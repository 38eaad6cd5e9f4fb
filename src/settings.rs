//! Start-up settings
//!
//! Command-line flags over an optional read-only JSON settings file over
//! built-in defaults. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Ticks the demo pilot plays before quitting (one minute at 10ms)
pub const DEFAULT_DEMO_TICKS: u64 = 6_000;

/// Command-line flags
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Fly low, drop bombs, flatten the city before you crash")]
pub struct Cli {
    /// Directory holding spritesheet.bmp and explosion.wav
    #[arg(long)]
    pub assets: Option<PathBuf>,
    /// Run fullscreen
    #[arg(long)]
    pub fullscreen: bool,
    /// Start with sound off
    #[arg(long)]
    pub mute: bool,
    /// Seed for skyline generation (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Ticks to run the demo pilot for
    #[arg(long)]
    pub demo_ticks: Option<u64>,
    /// JSON settings file providing defaults
    #[arg(long = "settings")]
    pub settings_file: Option<PathBuf>,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: PathBuf,
    pub fullscreen: bool,
    pub mute: bool,
    pub seed: Option<u64>,
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            fullscreen: false,
            mute: false,
            seed: None,
            demo_ticks: DEFAULT_DEMO_TICKS,
        }
    }
}

impl Settings {
    /// Parse the process arguments and resolve settings
    pub fn load() -> Result<Self, SetupError> {
        Self::from_cli(&Cli::parse())
    }

    /// Resolve settings from parsed flags, reading the settings file if given
    pub fn from_cli(cli: &Cli) -> Result<Self, SetupError> {
        let base = match &cli.settings_file {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Read a JSON settings file
    pub fn load_file(path: &Path) -> Result<Self, SetupError> {
        let json = fs::read_to_string(path).map_err(|source| SetupError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SetupError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply command-line flags on top of these settings. Boolean flags can
    /// only switch an option on.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(assets) = &cli.assets {
            self.assets = assets.clone();
        }
        self.fullscreen |= cli.fullscreen;
        self.mute |= cli.mute;
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(ticks) = cli.demo_ticks {
            self.demo_ticks = ticks;
        }
        self
    }
}
