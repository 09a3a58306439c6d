//! Owned, render-ready projection of a timeline.

use crate::core::TimelineState;
use serde::{Deserialize, Serialize};

/// Everything a host needs to redraw after the timeline changes.
///
/// Recomputed from the state on every call; nothing here is cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineView<T> {
    pub current: T,
    /// Earlier snapshots with their absolute positions
    pub past: Vec<(T, usize)>,
    /// Later snapshots with their absolute positions
    pub future: Vec<(T, usize)>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl<T: Clone> From<&TimelineState<T>> for TimelineView<T> {
    fn from(state: &TimelineState<T>) -> Self {
        Self {
            current: state.current().clone(),
            past: state.past().iter().map(|s| s.to_owned_pair()).collect(),
            future: state.future().iter().map(|s| s.to_owned_pair()).collect(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
        }
    }
}
