//! Error types for Artfolio

use thiserror::Error;

/// Infrastructure errors.
///
/// Form validation failures are not represented here: they are ordinary
/// values ([`crate::validate::FieldErrors`]) handled by the form controllers.
#[derive(Error, Debug)]
pub enum ArtfolioError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::InteractionConfig`]
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for Artfolio operations
pub type Result<T> = std::result::Result<T, ArtfolioError>;
