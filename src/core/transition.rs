//! Pure transitions between timeline values.
//!
//! Every function here takes the current timeline by reference and returns
//! the next one. Requests that would break an invariant (an out-of-range
//! target, an undo with no past) return an unchanged copy instead of failing,
//! so callers never have to pre-validate indices.

use super::state::TimelineState;

impl<T: Clone> TimelineState<T> {
    /// Record `value` as the new current snapshot.
    ///
    /// Any future snapshots are discarded. Once the cursor sits exactly at
    /// `max_timeline_size`, the oldest snapshot is evicted and the cursor
    /// stays pinned there, so a timeline grown only through inserts keeps at
    /// most `max_timeline_size` past snapshots plus the current one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::TimelineState;
    ///
    /// let state = TimelineState::new(0).insert(1, 5).insert(2, 5);
    /// let state = state.undo_to(1).insert(9, 5);
    ///
    /// assert_eq!(state.timeline(), &[0, 1, 9]);
    /// assert_eq!(state.index(), 2);
    /// ```
    pub fn insert(&self, value: T, max_timeline_size: usize) -> Self {
        let at_cap = self.index == max_timeline_size;
        let start = usize::from(at_cap);
        let retained = &self.timeline[start..=self.index];

        let mut timeline = Vec::with_capacity(retained.len() + 1);
        timeline.extend_from_slice(retained);
        timeline.push(value);

        let index = if at_cap { self.index } else { self.index + 1 };
        Self { timeline, index }
    }

    /// Move the cursor back to `target`.
    ///
    /// Ignored unless there is a past and `target` is before the cursor.
    pub fn undo_to(&self, target: usize) -> Self {
        if !self.can_undo_to(target) {
            return self.clone();
        }
        self.with_cursor(target)
    }

    /// Move the cursor forward to `target`.
    ///
    /// Ignored unless `target` is after the cursor and inside the timeline.
    pub fn redo_to(&self, target: usize) -> Self {
        if !self.can_redo_to(target) {
            return self.clone();
        }
        self.with_cursor(target)
    }

    /// Move the cursor to any stored position, in either direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::TimelineState;
    ///
    /// let state = TimelineState::new('a').insert('b', 20).insert('c', 20);
    ///
    /// assert_eq!(state.jump_to(0).current(), &'a');
    /// assert_eq!(state.jump_to(3), state); // out of range: unchanged
    /// ```
    pub fn jump_to(&self, target: usize) -> Self {
        if !self.can_jump_to(target) {
            return self.clone();
        }
        self.with_cursor(target)
    }

    /// Step the cursor back by one, if there is a past.
    pub fn undo(&self) -> Self {
        match self.index.checked_sub(1) {
            Some(target) => self.undo_to(target),
            None => self.clone(),
        }
    }

    /// Step the cursor forward by one, if there is a future.
    pub fn redo(&self) -> Self {
        self.redo_to(self.index + 1)
    }

    /// Drop past and future, keeping only the current snapshot.
    pub fn clear(&self) -> Self {
        Self::new(self.current().clone())
    }

    fn with_cursor(&self, index: usize) -> Self {
        debug_assert!(index < self.timeline.len());
        Self {
            timeline: self.timeline.clone(),
            index,
        }
    }
}
