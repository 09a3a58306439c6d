//! Timeline configuration.
//!
//! A timeline has a single tunable, the cap on stored history. Configurations
//! can be built in code through [`TimelineConfigBuilder`] or loaded from JSON,
//! where missing fields fall back to their defaults.
//!
//! # Example
//!
//! ```rust
//! use rewind::config::TimelineConfig;
//!
//! let config = TimelineConfig::from_json(r#"{ "max_timeline_size": 5 }"#).unwrap();
//! assert_eq!(config.max_timeline_size, 5);
//!
//! let defaults = TimelineConfig::from_json("{}").unwrap();
//! assert_eq!(defaults, TimelineConfig::default());
//! ```

pub mod builder;
pub mod error;

pub use builder::TimelineConfigBuilder;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cap applied when none is configured
pub const DEFAULT_MAX_TIMELINE_SIZE: usize = 20;

/// Settings shared by every insert into a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Cursor position at which inserts start evicting the oldest snapshot
    pub max_timeline_size: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_timeline_size: DEFAULT_MAX_TIMELINE_SIZE,
        }
    }
}

impl TimelineConfig {
    pub fn builder() -> TimelineConfigBuilder {
        TimelineConfigBuilder::new()
    }

    /// Parse and validate a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            max_timeline_size = config.max_timeline_size,
            "loaded timeline config"
        );
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_timeline_size == 0 {
            return Err(ConfigError::ZeroTimelineSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_twenty() {
        assert_eq!(TimelineConfig::default().max_timeline_size, 20);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = TimelineConfig::from_json("{}").unwrap();
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn from_json_rejects_zero_cap() {
        let result = TimelineConfig::from_json(r#"{"max_timeline_size": 0}"#);
        assert!(matches!(result, Err(ConfigError::ZeroTimelineSize)));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let result = TimelineConfig::from_json(r#"{"max_timeline_size": "ten"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = TimelineConfig::builder().max_timeline_size(8).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TimelineConfig::from_json(&json).unwrap(), config);
    }
}
