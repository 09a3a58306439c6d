//! Errors for timelines assembled outside the engine's own operations.

use thiserror::Error;

/// Raised when a timeline is built from raw parts that break its invariants.
///
/// Engine operations never produce this; it only guards
/// [`TimelineState::from_parts`](super::TimelineState::from_parts) and
/// deserialization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Timeline must hold at least one snapshot")]
    EmptyTimeline,

    #[error("Cursor {index} is out of range for a timeline of {len} snapshots")]
    IndexOutOfRange { index: usize, len: usize },
}
