//! Form configuration.
//!
//! Every value has a default matching the stock registration form, so an empty
//! JSON object (or no config file at all) yields the standard behaviour.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::AgeParsing;

/// Special characters a password must draw at least one of by default.
pub const DEFAULT_PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Banner shown after a fully valid submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Registration Successful! Welcome aboard!";

/// Delay between a successful submission and the form reset.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Tunable parameters of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Minimum accepted age, inclusive.
    pub min_age: i64,
    /// How the age text is turned into a number.
    pub age_parsing: AgeParsing,
    /// Minimum number of whitespace-separated words in the full name.
    pub min_name_words: usize,
    /// Minimum password length in characters.
    pub min_password_chars: usize,
    /// Characters accepted as the password's special character.
    pub password_specials: String,
    /// Delay before the form resets after a successful submission.
    pub reset_delay_ms: u64,
    /// Banner text after a successful submission.
    pub success_message: String,
    /// Ignore input while the success banner is up.
    pub disable_during_reset: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            age_parsing: AgeParsing::default(),
            min_name_words: 2,
            min_password_chars: 8,
            password_specials: DEFAULT_PASSWORD_SPECIALS.to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY.as_millis() as u64,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            disable_during_reset: true,
        }
    }
}

impl FormConfig {
    /// Parse and check a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a JSON config file, falling back to defaults if it does not exist.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values that would make the form unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_words == 0 {
            return Err(ConfigError::invalid("min_name_words", "must be at least 1"));
        }
        if self.min_password_chars == 0 {
            return Err(ConfigError::invalid(
                "min_password_chars",
                "must be at least 1",
            ));
        }
        if self.password_specials.is_empty() {
            return Err(ConfigError::invalid(
                "password_specials",
                "must not be empty",
            ));
        }
        if self.reset_delay_ms == 0 {
            return Err(ConfigError::invalid(
                "reset_delay_ms",
                "must be greater than zero",
            ));
        }
        if self.success_message.trim().is_empty() {
            return Err(ConfigError::invalid("success_message", "must not be blank"));
        }
        Ok(())
    }

    /// Reset delay as a [`Duration`].
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FormConfig::default().validate().is_ok());
        assert_eq!(FormConfig::default().reset_delay(), DEFAULT_RESET_DELAY);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }
}
