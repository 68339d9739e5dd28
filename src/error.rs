use thiserror::Error;

/// Errors that can occur while reading startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Palette index {index} is out of range (palette has {len} colors)")]
    PaletteIndex { index: usize, len: usize },

    #[error("Configuration variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
