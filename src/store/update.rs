//! Value-or-function updates for the store.

use std::fmt;

/// Argument to [`TimelineStore::set_state`](super::TimelineStore::set_state).
///
/// Either the next value outright, or a function computing it from the
/// current snapshot. The variant is picked by the caller, never guessed.
///
/// # Example
///
/// ```rust
/// use rewind::store::SetState;
///
/// assert_eq!(SetState::Value(4).resolve(&1), 4);
/// assert_eq!(SetState::updater(|n: &i32| n + 1).resolve(&1), 2);
/// ```
pub enum SetState<T> {
    /// Replace the current snapshot with this value
    Value(T),
    /// Derive the next snapshot from the current one
    Updater(Box<dyn FnOnce(&T) -> T + Send>),
}

impl<T> SetState<T> {
    /// Wrap a closure as an updater.
    pub fn updater<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + Send + 'static,
    {
        SetState::Updater(Box::new(f))
    }

    /// Produce the next snapshot given the current one.
    pub fn resolve(self, current: &T) -> T {
        match self {
            SetState::Value(value) => value,
            SetState::Updater(update) => update(current),
        }
    }
}

impl<T> From<T> for SetState<T> {
    fn from(value: T) -> Self {
        SetState::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetState::Value(value) => f.debug_tuple("Value").field(value).finish(),
            SetState::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}
