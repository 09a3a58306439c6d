//! Borrowed views of individual snapshots in a timeline.

/// A single stored snapshot paired with its absolute position in the timeline.
///
/// Slices returned by [`TimelineState::past`](super::TimelineState::past) and
/// [`TimelineState::future`](super::TimelineState::future) keep the index the
/// snapshot occupies in the full timeline, not its offset within the slice,
/// so it can be handed straight back to `undo_to`, `redo_to` or `jump_to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlice<'a, T> {
    /// The stored snapshot
    pub value: &'a T,
    /// Absolute position of the snapshot in the timeline
    pub index: usize,
}

impl<'a, T> TimeSlice<'a, T> {
    /// Pair a snapshot with its position in the timeline.
    pub fn new(value: &'a T, index: usize) -> Self {
        Self { value, index }
    }

    /// Clone the snapshot out into an owned `(value, index)` pair.
    pub fn to_owned_pair(&self) -> (T, usize)
    where
        T: Clone,
    {
        (self.value.clone(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_pair_keeps_absolute_index() {
        let value = String::from("draft");
        let slice = TimeSlice::new(&value, 7);

        assert_eq!(slice.to_owned_pair(), ("draft".to_string(), 7));
    }
}
