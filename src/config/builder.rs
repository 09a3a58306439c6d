//! Builder API for timeline configuration.

use crate::config::error::ConfigError;
use crate::config::{TimelineConfig, DEFAULT_MAX_TIMELINE_SIZE};

/// Builder for creating a validated [`TimelineConfig`].
///
/// # Example
///
/// ```rust
/// use rewind::config::TimelineConfigBuilder;
///
/// let config = TimelineConfigBuilder::new().max_timeline_size(50).build().unwrap();
/// assert_eq!(config.max_timeline_size, 50);
/// ```
#[derive(Debug, Clone)]
pub struct TimelineConfigBuilder {
    max_timeline_size: usize,
}

impl TimelineConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_timeline_size: DEFAULT_MAX_TIMELINE_SIZE,
        }
    }

    /// Set the cap at which the oldest past snapshot is evicted
    pub fn max_timeline_size(mut self, size: usize) -> Self {
        self.max_timeline_size = size;
        self
    }

    /// Build the configuration.
    /// Returns an error if the cap is zero.
    pub fn build(self) -> Result<TimelineConfig, ConfigError> {
        let config = TimelineConfig {
            max_timeline_size: self.max_timeline_size,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for TimelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_twenty() {
        let config = TimelineConfigBuilder::new().build().unwrap();
        assert_eq!(config.max_timeline_size, 20);
    }

    #[test]
    fn builder_rejects_zero_cap() {
        let result = TimelineConfigBuilder::new().max_timeline_size(0).build();
        assert!(matches!(result, Err(ConfigError::ZeroTimelineSize)));
    }

    #[test]
    fn builder_keeps_last_value() {
        let config = TimelineConfigBuilder::new()
            .max_timeline_size(3)
            .max_timeline_size(7)
            .build()
            .unwrap();

        assert_eq!(config.max_timeline_size, 7);
    }
}
