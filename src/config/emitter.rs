//! Emitter configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::emitter::DEFAULT_PREFIX;

/// Emitter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmitterConfig {
    /// Channel prefix shared with the Socket.IO servers' Redis adapter
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl EmitterConfig {
    /// Validate emitter configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefix.is_empty() {
            return Err(ValidationError::MissingRequired("EMITTER_PREFIX"));
        }
        if self.prefix.contains('#') {
            return Err(ValidationError::InvalidPrefix);
        }
        Ok(())
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_socket_io() {
        assert_eq!(EmitterConfig::default().prefix, "socket.io");
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let config = EmitterConfig {
            prefix: String::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn prefix_with_separator_is_rejected() {
        let config = EmitterConfig {
            prefix: "a#b".to_string(),
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPrefix)));
    }
}
