//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::AttributeKey;

/// Rounds per session. Fixed by the cookie wire format.
pub const ROUND_COUNT: usize = 10;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Attribute every round is judged on (default: "inclusion").
    pub attribute: AttributeKey,

    /// Upper bound for the candidate fetch and per-card asset resolution.
    pub fetch_timeout_ms: u64,

    /// Days after the session date at whose Central midnight the daily
    /// cookie expires (1 = end of the current day).
    pub retention_days: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attribute: AttributeKey::new("inclusion"),
            fetch_timeout_ms: 10_000,
            retention_days: 1,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| EngineError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.retention_days == 0 {
            return Err(EngineError::Config {
                message: "retention_days must be at least 1".into(),
            });
        }
        if self.attribute.as_str().is_empty() {
            return Err(EngineError::Config {
                message: "attribute must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Set the comparison attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<AttributeKey>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Set the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the cookie retention in days.
    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}
