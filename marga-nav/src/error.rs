//! Error types for marga-nav

use thiserror::Error;

/// marga-nav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Grid error: {0}")]
    Map(#[from] marga_map::MapError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
