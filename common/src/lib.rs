use thiserror::Error;

pub mod config;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),

    #[error("Please add at least one column configuration.")]
    EmptyConfiguration,
}

impl Error {
    /// True for errors the operator can fix by editing the form.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::EmptyConfiguration)
    }
}
