//! The timeline value: an ordered run of snapshots plus a cursor.
//!
//! All methods here are pure queries. Transitions that produce a new
//! timeline live in the sibling `transition` module.

use super::error::TimelineError;
use super::slice::TimeSlice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seed for a fresh timeline: either a value or a factory that produces one.
///
/// The variant is chosen explicitly by the caller, so a `T` that happens to
/// be callable is never invoked by accident.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Seed, TimelineState};
///
/// let eager = TimelineState::initialize(Seed::Value(3));
/// let lazy = TimelineState::initialize(Seed::factory(|| 3));
///
/// assert_eq!(eager, lazy);
/// ```
pub enum Seed<T> {
    /// Use this value as the first snapshot
    Value(T),
    /// Call this once to produce the first snapshot
    Factory(Box<dyn FnOnce() -> T>),
}

impl<T> Seed<T> {
    /// Wrap a closure as a factory seed.
    pub fn factory<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Seed::Factory(Box::new(f))
    }

    /// Produce the seed value, invoking the factory if there is one.
    pub fn resolve(self) -> T {
        match self {
            Seed::Value(value) => value,
            Seed::Factory(factory) => factory(),
        }
    }
}

impl<T> From<T> for Seed<T> {
    fn from(value: T) -> Self {
        Seed::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Seed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Seed::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Ordered snapshots with a cursor marking the current one.
///
/// Two invariants hold for every value of this type:
///
/// - the timeline is never empty
/// - `index` always points at a stored snapshot
///
/// Snapshots before the cursor are the past (undo targets) and snapshots
/// after it are the future (redo targets). Neither is stored separately.
///
/// Timelines are immutable: every transition returns a new value and leaves
/// the receiver untouched.
///
/// # Example
///
/// ```rust
/// use rewind::core::TimelineState;
///
/// let state = TimelineState::new("a").insert("b", 20).insert("c", 20);
///
/// assert_eq!(state.current(), &"c");
/// assert_eq!(state.index(), 2);
/// assert!(state.can_undo());
/// assert!(!state.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawTimeline<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct TimelineState<T> {
    pub(super) timeline: Vec<T>,
    pub(super) index: usize,
}

/// Unchecked wire shape; converted through [`TimelineState::from_parts`].
#[derive(Deserialize)]
struct RawTimeline<T> {
    timeline: Vec<T>,
    index: usize,
}

impl<T> TryFrom<RawTimeline<T>> for TimelineState<T> {
    type Error = TimelineError;

    fn try_from(raw: RawTimeline<T>) -> Result<Self, Self::Error> {
        Self::from_parts(raw.timeline, raw.index)
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T> TimelineState<T> {
    /// Start a timeline holding a single snapshot.
    pub fn new(initial: T) -> Self {
        Self {
            timeline: vec![initial],
            index: 0,
        }
    }

    /// Start a timeline whose first snapshot is produced by `factory`.
    pub fn from_fn<F>(factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(factory())
    }

    /// Start a timeline from an explicit [`Seed`].
    pub fn initialize(seed: Seed<T>) -> Self {
        Self::new(seed.resolve())
    }

    /// Assemble a timeline from raw parts, checking both invariants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{TimelineError, TimelineState};
    ///
    /// assert!(TimelineState::from_parts(vec![1, 2, 3], 1).is_ok());
    /// assert_eq!(
    ///     TimelineState::<i32>::from_parts(vec![], 0),
    ///     Err(TimelineError::EmptyTimeline)
    /// );
    /// assert_eq!(
    ///     TimelineState::from_parts(vec![1], 1),
    ///     Err(TimelineError::IndexOutOfRange { index: 1, len: 1 })
    /// );
    /// ```
    pub fn from_parts(timeline: Vec<T>, index: usize) -> Result<Self, TimelineError> {
        if timeline.is_empty() {
            return Err(TimelineError::EmptyTimeline);
        }
        if index >= timeline.len() {
            return Err(TimelineError::IndexOutOfRange {
                index,
                len: timeline.len(),
            });
        }
        Ok(Self { timeline, index })
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &T {
        &self.timeline[self.index]
    }

    /// Consume the timeline, keeping only the current snapshot.
    pub fn into_current(mut self) -> T {
        self.timeline.swap_remove(self.index)
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored snapshots. Always at least one.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// All stored snapshots, oldest first.
    pub fn timeline(&self) -> &[T] {
        &self.timeline
    }

    /// Snapshots before the cursor, oldest first, with absolute indices.
    pub fn past(&self) -> Vec<TimeSlice<'_, T>> {
        self.timeline[..self.index]
            .iter()
            .enumerate()
            .map(|(index, value)| TimeSlice::new(value, index))
            .collect()
    }

    /// Snapshots after the cursor, oldest first, with absolute indices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::TimelineState;
    ///
    /// let state = TimelineState::from_parts(vec!['a', 'b', 'c', 'd'], 1).unwrap();
    /// let future: Vec<_> = state.future().iter().map(|s| (*s.value, s.index)).collect();
    ///
    /// assert_eq!(future, vec![('c', 2), ('d', 3)]);
    /// ```
    pub fn future(&self) -> Vec<TimeSlice<'_, T>> {
        let start = self.index + 1;
        self.timeline[start..]
            .iter()
            .enumerate()
            .map(|(offset, value)| TimeSlice::new(value, start + offset))
            .collect()
    }

    /// Whether a single-step undo is possible.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether `undo_to(target)` would move the cursor.
    pub fn can_undo_to(&self, target: usize) -> bool {
        self.index > 0 && target < self.index
    }

    /// Whether a single-step redo is possible.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.timeline.len()
    }

    /// Whether `redo_to(target)` would move the cursor.
    pub fn can_redo_to(&self, target: usize) -> bool {
        target < self.timeline.len() && target > self.index
    }

    /// Whether `jump_to(target)` lands on a stored snapshot.
    pub fn can_jump_to(&self, target: usize) -> bool {
        target < self.timeline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Draft {
        Empty,
        Outline,
        Written,
    }

    fn three_drafts(index: usize) -> TimelineState<Draft> {
        TimelineState::from_parts(vec![Draft::Empty, Draft::Outline, Draft::Written], index)
            .unwrap()
    }

    #[test]
    fn new_timeline_holds_one_snapshot() {
        let state = TimelineState::new(Draft::Empty);

        assert_eq!(state.len(), 1);
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(), &Draft::Empty);
        assert!(state.past().is_empty());
        assert!(state.future().is_empty());
    }

    #[test]
    fn factory_seed_is_invoked_once() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();

        let state = TimelineState::initialize(Seed::factory(move || {
            counter.set(counter.get() + 1);
            Draft::Outline
        }));

        assert_eq!(calls.get(), 1);
        assert_eq!(state.current(), &Draft::Outline);
    }

    #[test]
    fn value_seed_is_used_directly() {
        let state = TimelineState::initialize(Draft::Written.into());
        assert_eq!(state.timeline(), &[Draft::Written]);
    }

    #[test]
    fn from_fn_matches_new() {
        assert_eq!(
            TimelineState::from_fn(|| Draft::Empty),
            TimelineState::new(Draft::Empty)
        );
    }

    #[test]
    fn seed_debug_hides_factory() {
        assert_eq!(format!("{:?}", Seed::Value(1)), "Value(1)");
        assert_eq!(format!("{:?}", Seed::factory(|| 1)), "Factory(..)");
    }

    #[test]
    fn past_and_future_split_around_cursor() {
        let state = three_drafts(1);

        let past: Vec<_> = state.past().iter().map(|s| s.to_owned_pair()).collect();
        let future: Vec<_> = state.future().iter().map(|s| s.to_owned_pair()).collect();

        assert_eq!(past, vec![(Draft::Empty, 0)]);
        assert_eq!(future, vec![(Draft::Written, 2)]);
        assert_eq!(state.current(), &Draft::Outline);
    }

    #[test]
    fn can_undo_and_redo_follow_cursor() {
        let start = three_drafts(0);
        assert!(!start.can_undo());
        assert!(start.can_redo());

        let end = three_drafts(2);
        assert!(end.can_undo());
        assert!(!end.can_redo());
        assert!(end.can_undo_to(0));
        assert!(!end.can_undo_to(2));
        assert!(!end.can_redo_to(3));
    }

    #[test]
    fn into_current_returns_cursor_snapshot() {
        assert_eq!(three_drafts(0).into_current(), Draft::Empty);
        assert_eq!(three_drafts(1).into_current(), Draft::Outline);
    }

    #[test]
    fn from_parts_rejects_broken_invariants() {
        assert_eq!(
            TimelineState::<Draft>::from_parts(Vec::new(), 0),
            Err(TimelineError::EmptyTimeline)
        );
        assert_eq!(
            TimelineState::from_parts(vec![Draft::Empty], 3),
            Err(TimelineError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn timeline_serializes_correctly() {
        let state = three_drafts(1);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TimelineState<Draft> = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn deserialization_checks_invariants() {
        let empty = serde_json::from_str::<TimelineState<Draft>>(r#"{"timeline":[],"index":0}"#);
        assert!(empty.is_err());

        let out_of_range =
            serde_json::from_str::<TimelineState<Draft>>(r#"{"timeline":["Empty"],"index":1}"#);
        let message = out_of_range.unwrap_err().to_string();
        assert!(message.contains("out of range"));
    }
}
