//! Configuration error types

/// Errors that can occur while loading or checking a [`FormConfig`](crate::FormConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config document is not valid JSON for the expected shape.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but makes no sense.
    #[error("Invalid config value for '{key}': {reason}")]
    Invalid {
        /// Config key at fault.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A rule pattern failed to compile.
    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConfigError {
    /// Creates a new invalid value error.
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }

    /// Returns the offending key for invalid value errors.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}
