//! Closed set of timeline transitions as plain data.
//!
//! An action describes a transition without performing it, so it can be
//! queued, logged, or generated in bulk by tests before being applied.

use super::state::TimelineState;
use serde::{Deserialize, Serialize};

/// A single request against a timeline.
///
/// # Example
///
/// ```rust
/// use rewind::core::{TimelineAction, TimelineState};
///
/// let actions = vec![
///     TimelineAction::Insert("draft"),
///     TimelineAction::Insert("final"),
///     TimelineAction::Undo,
/// ];
///
/// let state = actions
///     .into_iter()
///     .fold(TimelineState::new("empty"), |state, action| action.apply(&state, 20));
///
/// assert_eq!(state.current(), &"draft");
/// assert!(state.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineAction<T> {
    /// Record a new current snapshot, discarding the future
    Insert(T),
    /// Step back one snapshot
    Undo,
    /// Step forward one snapshot
    Redo,
    /// Move back to an earlier position
    UndoTo(usize),
    /// Move forward to a later position
    RedoTo(usize),
    /// Move to any stored position
    JumpTo(usize),
    /// Collapse the timeline to the current snapshot
    Clear,
}

impl<T> TimelineAction<T> {
    /// Short label for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::UndoTo(_) => "undo_to",
            Self::RedoTo(_) => "redo_to",
            Self::JumpTo(_) => "jump_to",
            Self::Clear => "clear",
        }
    }

    /// Whether applying this action would produce a different timeline.
    ///
    /// Jumping to the current position and clearing a single-snapshot
    /// timeline are accepted by the engine but leave it as it was.
    pub fn changes(&self, state: &TimelineState<T>) -> bool {
        match self {
            Self::Insert(_) => true,
            Self::Undo => state.can_undo(),
            Self::Redo => state.can_redo(),
            Self::UndoTo(target) => state.can_undo_to(*target),
            Self::RedoTo(target) => state.can_redo_to(*target),
            Self::JumpTo(target) => state.can_jump_to(*target) && *target != state.index(),
            Self::Clear => state.len() > 1,
        }
    }
}

impl<T: Clone> TimelineAction<T> {
    /// Apply this action, returning the next timeline.
    pub fn apply(self, state: &TimelineState<T>, max_timeline_size: usize) -> TimelineState<T> {
        match self {
            Self::Insert(value) => state.insert(value, max_timeline_size),
            Self::Undo => state.undo(),
            Self::Redo => state.redo(),
            Self::UndoTo(target) => state.undo_to(target),
            Self::RedoTo(target) => state.redo_to(target),
            Self::JumpTo(target) => state.jump_to(target),
            Self::Clear => state.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimelineState<u8> {
        TimelineState::from_parts(vec![1, 2, 3], 1).unwrap()
    }

    #[test]
    fn apply_dispatches_to_engine() {
        let state = sample();

        assert_eq!(TimelineAction::Undo.apply(&state, 20), state.undo());
        assert_eq!(TimelineAction::Redo.apply(&state, 20), state.redo());
        assert_eq!(TimelineAction::JumpTo(2).apply(&state, 20), state.jump_to(2));
        assert_eq!(TimelineAction::Clear.apply(&state, 20), state.clear());
        assert_eq!(
            TimelineAction::Insert(9).apply(&state, 20),
            state.insert(9, 20)
        );
    }

    #[test]
    fn changes_agrees_with_apply() {
        let state = sample();
        let actions = vec![
            TimelineAction::Insert(4),
            TimelineAction::Undo,
            TimelineAction::Redo,
            TimelineAction::UndoTo(0),
            TimelineAction::UndoTo(1),
            TimelineAction::RedoTo(2),
            TimelineAction::RedoTo(3),
            TimelineAction::JumpTo(1),
            TimelineAction::JumpTo(5),
            TimelineAction::Clear,
        ];

        for action in actions {
            let expected = action.changes(&state);
            let next = action.clone().apply(&state, 20);
            assert_eq!(expected, next != state, "{}", action.name());
        }
    }

    #[test]
    fn clear_on_single_snapshot_changes_nothing() {
        let state = TimelineState::new(1u8);
        assert!(!TimelineAction::Clear.changes(&state));
    }

    #[test]
    fn action_serializes_correctly() {
        let action: TimelineAction<String> = TimelineAction::JumpTo(3);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: TimelineAction<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
