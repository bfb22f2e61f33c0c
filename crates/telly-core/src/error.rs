use thiserror::Error;

#[derive(Debug, Error)]
pub enum TellyError {
    /// The config file or its env overrides could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TellyError>;
