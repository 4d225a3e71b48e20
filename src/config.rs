//! YAML configuration for the desktop app
//!
//! A missing file means defaults; a present but invalid file is an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Mark;
use crate::error::AppError;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";

const MIN_WINDOW_SIDE: f32 = 200.0;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub players: PlayerNames,
    /// Show the "Game Over" dialog when a game ends
    pub show_result_dialog: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

/// Display names for the two marks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerNames {
    pub x_name: String,
    pub o_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            players: PlayerNames::default(),
            show_result_dialog: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 480.0,
            title: "Tic Tac Toe".to_string(),
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x_name: "X".to_string(),
            o_name: "O".to_string(),
        }
    }
}

impl PlayerNames {
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_name,
            Mark::O => &self.o_name,
            Mark::Empty => "",
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < MIN_WINDOW_SIDE || self.height < MIN_WINDOW_SIDE {
            return Err(format!(
                "window size {}x{} is below the {} pixel minimum",
                self.width, self.height, MIN_WINDOW_SIDE
            ));
        }
        if self.title.trim().is_empty() {
            return Err("window title must not be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for PlayerNames {
    fn validate(&self) -> Result<(), String> {
        if self.x_name.trim().is_empty() || self.o_name.trim().is_empty() {
            return Err("player names must not be empty".to_string());
        }
        if self.x_name == self.o_name {
            return Err(format!("both players are named '{}'", self.x_name));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.players.validate()
    }
}

impl AppConfig {
    /// Parse and validate YAML
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = serde_yaml_ng::from_str(content)?;
        config.validate().map_err(AppError::Validation)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_yaml(&content)?;
                info!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write the defaults to `path`, which must not exist yet
    pub fn write_default(path: &Path) -> Result<(), AppError> {
        if path.exists() {
            return Err(AppError::ConfigExists(PathBuf::from(path)));
        }
        Self::default().save(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        self.validate().map_err(AppError::Validation)?;
        std::fs::write(path, self.to_yaml()?)?;
        info!(path = %path.display(), "Wrote config");
        Ok(())
    }
}
