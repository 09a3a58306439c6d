//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading a timeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_timeline_size must be at least 1")]
    ZeroTimelineSize,

    #[error("Failed to parse timeline config: {0}")]
    Parse(#[from] serde_json::Error),
}
