use thiserror::Error;

pub type Result<T> = core::result::Result<T, FetchmarkError>;

#[derive(Error, Debug)]
pub enum FetchmarkError {
    #[error("Logging setup error: {0}")]
    LoggingSetup(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}
