//! Application error type

use derive_more::{Display, Error, From};

/// Errors outside the game itself: configuration loading and window startup.
/// Game moves never fail; invalid ones are ignored.
#[derive(Debug, Display, Error, From)]
pub enum AppError {
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    #[display("Invalid YAML: {_0}")]
    Yaml(serde_yaml_ng::Error),

    #[display("Invalid configuration: {_0}")]
    #[from(skip)]
    Validation(#[error(not(source))] String),

    #[display("Refusing to overwrite existing config {}", _0.display())]
    #[from(skip)]
    ConfigExists(#[error(not(source))] std::path::PathBuf),

    #[display("GUI error: {_0}")]
    #[from(skip)]
    Gui(#[error(not(source))] String),
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Gui(err.to_string())
    }
}
