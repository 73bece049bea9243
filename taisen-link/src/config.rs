//! Link configuration
//!
//! Everything about the demo that is a tunable rather than a protocol
//! constant. With the `serde` feature the config can be stored as postcard
//! binary or written by hand as TOML.

use heapless::String;
use taisen_hal::ControllerId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::heartbeat::{HEARTBEAT_MESSAGE, HEARTBEAT_PERIOD};

/// Maximum heartbeat message length
pub const MAX_MESSAGE_LEN: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Heartbeat message has no characters
    EmptyMessage,
    /// Heartbeat message exceeds [`MAX_MESSAGE_LEN`]
    MessageTooLong,
    /// Heartbeat period of zero ticks
    ZeroPeriod,
}

/// Demo link configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    /// Message cycled by the heartbeat
    pub heartbeat_message: String<MAX_MESSAGE_LEN>,
    /// Ticks between heartbeat characters
    pub heartbeat_period: u32,
    /// Controller sampled by the input encoder
    pub controller: ControllerId,
}

impl Default for LinkConfig {
    fn default() -> Self {
        let mut heartbeat_message = String::new();
        if let Ok(text) = core::str::from_utf8(HEARTBEAT_MESSAGE) {
            let _ = heartbeat_message.push_str(text);
        }

        Self {
            heartbeat_message,
            heartbeat_period: HEARTBEAT_PERIOD,
            controller: 0,
        }
    }
}

impl LinkConfig {
    /// Check the configuration for values the link cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heartbeat_message.is_empty() {
            return Err(ConfigError::EmptyMessage);
        }
        if self.heartbeat_period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LinkConfig::default();
        assert_eq!(config.heartbeat_message.as_str(), "LOOC si sihT ");
        assert_eq!(config.heartbeat_period, 256);
        assert_eq!(config.controller, 0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_message() {
        let config = LinkConfig {
            heartbeat_message: String::new(),
            ..LinkConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyMessage));
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let config = LinkConfig {
            heartbeat_period: 0,
            ..LinkConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_roundtrip() {
        let mut config = LinkConfig::default();
        config.heartbeat_period = 60;
        config.controller = 1;

        let mut buf = [0u8; 64];
        let used = postcard::to_slice(&config, &mut buf).unwrap();
        let decoded: LinkConfig = postcard::from_bytes(used).unwrap();

        assert_eq!(decoded, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_partial_config_uses_defaults() {
        let config: LinkConfig = toml::from_str(
            r#"
            heartbeat_message = "PING "
            heartbeat_period = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.heartbeat_message.as_str(), "PING ");
        assert_eq!(config.heartbeat_period, 60);
        assert_eq!(config.controller, 0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_message_too_long_is_rejected() {
        let result: Result<LinkConfig, _> =
            toml::from_str(r#"heartbeat_message = "this message is far too long to fit in the link""#);
        assert!(result.is_err());
    }
}
