//! Error types for prosemeter-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A reading-speed preset was configured with zero words per minute.
    #[error("reading speed preset '{preset}' must be greater than zero words per minute")]
    InvalidReadingSpeed {
        /// The preset name that carried the bad rate.
        preset: String,
    },

    /// An n-gram size of zero was requested.
    #[error("n-gram size must be at least 1")]
    ZeroNgramSize,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
