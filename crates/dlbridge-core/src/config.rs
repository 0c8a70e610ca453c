use crate::constants::{CUSTOM_AREA_MAX_LENGTH, DEFAULT_DECODE_TIMEOUT_MS, DEFAULT_EVENT_QUEUE_LIMIT};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration shared by the manager facades and the mock hosts.
///
/// Missing fields take their defaults when loaded from JSON.
///
/// # Example
///
/// ```
/// use dlbridge_core::SdkConfig;
///
/// let config = SdkConfig::default();
/// assert_eq!(config.default_decode_timeout_ms, 5000);
///
/// let config = SdkConfig::from_json_str(r#"{ "default_decode_timeout_ms": 10000 }"#).unwrap();
/// assert_eq!(config.default_decode_timeout_ms, 10000);
/// assert_eq!(config.custom_area_limit, 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Timeout passed to the host by `start_decode` when the caller gives none.
    pub default_decode_timeout_ms: u32,

    /// Custom area capacity of the cradle, in characters.
    ///
    /// Enforced by the host; the cradle facade only logs oversized writes.
    pub custom_area_limit: usize,

    /// Maximum number of host events waiting for a dispatch turn.
    pub event_queue_limit: usize,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            default_decode_timeout_ms: DEFAULT_DECODE_TIMEOUT_MS,
            custom_area_limit: CUSTOM_AREA_MAX_LENGTH,
            event_queue_limit: DEFAULT_EVENT_QUEUE_LIMIT,
        }
    }
}

impl SdkConfig {
    /// Set the default decode timeout in milliseconds
    pub fn default_decode_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.default_decode_timeout_ms = timeout_ms;
        self
    }

    /// Set the cradle custom area capacity
    pub fn custom_area_limit(mut self, limit: usize) -> Self {
        self.custom_area_limit = limit;
        self
    }

    /// Set the pending event queue bound
    pub fn event_queue_limit(mut self, limit: usize) -> Self {
        self.event_queue_limit = limit;
        self
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns `Error::Config` if the document is not valid JSON for this
    /// structure or fails [`SdkConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SdkConfig = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read and `Error::Config`
    /// if its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that every limit is usable.
    ///
    /// # Errors
    /// Returns `Error::Config` naming the first zero-valued field.
    pub fn validate(&self) -> Result<()> {
        if self.default_decode_timeout_ms == 0 {
            return Err(Error::config("default_decode_timeout_ms must be greater than 0"));
        }
        if self.custom_area_limit == 0 {
            return Err(Error::config("custom_area_limit must be greater than 0"));
        }
        if self.event_queue_limit == 0 {
            return Err(Error::config("event_queue_limit must be greater than 0"));
        }
        Ok(())
    }
}
