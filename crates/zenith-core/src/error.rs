//! Errors raised while building or configuring themes

use thiserror::Error;

/// Theme configuration errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color string was not `#RRGGBB` or `#AARRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Theme name is not one of the known themes
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Color token name is not one of the known tokens
    #[error("Unknown color name: {0}")]
    UnknownColorName(String),

    /// Theme settings document could not be parsed
    #[error("Invalid theme settings: {0}")]
    Settings(#[from] serde_json::Error),
}
