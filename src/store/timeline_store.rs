//! Store that owns the latest timeline and forwards requests to the engine.

use crate::config::{ConfigError, TimelineConfig};
use crate::core::{Seed, TimelineAction, TimelineState};
use crate::store::update::SetState;
use crate::store::view::TimelineView;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Atomically replaceable timeline slot with change notification.
///
/// Every write runs against the most recently stored timeline while holding
/// the slot's lock, then swaps in the result and wakes subscribers. Requests
/// the engine would ignore (undo with no past, out-of-range jumps) leave the
/// slot untouched and wake nobody.
///
/// All methods are synchronous. Subscribers may wait for changes from async
/// code with [`watch::Receiver::changed`].
///
/// # Example
///
/// ```rust
/// use rewind::config::TimelineConfig;
/// use rewind::store::{SetState, TimelineStore};
///
/// let store = TimelineStore::new(0, TimelineConfig::default());
///
/// store.set_state(1);
/// store.set_state(SetState::updater(|n: &i32| n * 10));
/// assert_eq!(store.current(), 10);
///
/// assert!(store.undo());
/// assert_eq!(store.current(), 1);
///
/// let view = store.view();
/// assert!(view.can_undo);
/// assert!(view.can_redo);
/// assert_eq!(view.future, vec![(10, 2)]);
/// ```
#[derive(Debug)]
pub struct TimelineStore<T> {
    slot: watch::Sender<TimelineState<T>>,
    config: TimelineConfig,
}

impl<T: Clone> TimelineStore<T> {
    /// Create a store whose timeline starts at `initial`.
    ///
    /// The config is taken as given and not validated; use
    /// [`TimelineStore::try_new`] to reject a zero cap.
    pub fn new(initial: T, config: TimelineConfig) -> Self {
        Self::from_state(TimelineState::new(initial), config)
    }

    /// Create a store after checking `config` is usable.
    pub fn try_new(initial: T, config: TimelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(initial, config))
    }

    /// Create a store from an explicit value-or-factory seed.
    pub fn with_seed(seed: Seed<T>, config: TimelineConfig) -> Self {
        Self::from_state(TimelineState::initialize(seed), config)
    }

    /// Create a store with the default configuration.
    pub fn with_defaults(initial: T) -> Self {
        Self::new(initial, TimelineConfig::default())
    }

    /// Create a store around an existing timeline.
    pub fn from_state(state: TimelineState<T>, config: TimelineConfig) -> Self {
        let (slot, _) = watch::channel(state);
        debug!(
            max_timeline_size = config.max_timeline_size,
            "timeline store created"
        );
        Self { slot, config }
    }

    /// Configuration applied to every insert.
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    /// Record a new current snapshot.
    ///
    /// An updater is called with the current snapshot while the slot is
    /// locked, so it must not call back into this store.
    pub fn set_state(&self, update: impl Into<SetState<T>>) {
        let update = update.into();
        let max_timeline_size = self.config.max_timeline_size;

        let mut recorded = (0, 0);
        self.slot.send_modify(|state| {
            let next = update.resolve(state.current());
            *state = state.insert(next, max_timeline_size);
            recorded = (state.index(), state.len());
        });

        let (index, len) = recorded;
        debug!(index, len, "timeline snapshot recorded");
    }

    /// Apply an action to the stored timeline.
    ///
    /// Returns `true` if the timeline changed and subscribers were notified.
    pub fn dispatch(&self, action: TimelineAction<T>) -> bool {
        let name = action.name();
        let max_timeline_size = self.config.max_timeline_size;

        let mut updated = None;
        let changed = self.slot.send_if_modified(|state| {
            if !action.changes(state) {
                return false;
            }
            *state = action.apply(state, max_timeline_size);
            updated = Some((state.index(), state.len()));
            true
        });

        if let Some((index, len)) = updated {
            debug!(action = name, index, len, "timeline updated");
        } else {
            trace!(action = name, "timeline action ignored");
        }
        changed
    }

    /// Step back one snapshot.
    pub fn undo(&self) -> bool {
        self.dispatch(TimelineAction::Undo)
    }

    /// Step forward one snapshot.
    pub fn redo(&self) -> bool {
        self.dispatch(TimelineAction::Redo)
    }

    /// Move back to an earlier position.
    pub fn undo_to(&self, target: usize) -> bool {
        self.dispatch(TimelineAction::UndoTo(target))
    }

    /// Move forward to a later position.
    pub fn redo_to(&self, target: usize) -> bool {
        self.dispatch(TimelineAction::RedoTo(target))
    }

    /// Move to any stored position.
    pub fn jump_to(&self, target: usize) -> bool {
        self.dispatch(TimelineAction::JumpTo(target))
    }

    /// Collapse history to the current snapshot.
    pub fn clear(&self) -> bool {
        self.dispatch(TimelineAction::Clear)
    }

    /// Run `f` against the stored timeline without cloning it.
    ///
    /// The slot is read-locked while `f` runs; writes from other threads wait.
    pub fn with_state<R>(&self, f: impl FnOnce(&TimelineState<T>) -> R) -> R {
        f(&*self.slot.borrow())
    }

    /// Clone of the stored timeline.
    pub fn state(&self) -> TimelineState<T> {
        self.with_state(TimelineState::clone)
    }

    /// Clone of the snapshot under the cursor.
    pub fn current(&self) -> T {
        self.with_state(|state| state.current().clone())
    }

    /// Render-ready projection of the stored timeline.
    pub fn view(&self) -> TimelineView<T> {
        self.with_state(|state| TimelineView::from(state))
    }

    /// Whether a single-step undo is possible.
    pub fn can_undo(&self) -> bool {
        self.with_state(TimelineState::can_undo)
    }

    /// Whether a single-step redo is possible.
    pub fn can_redo(&self) -> bool {
        self.with_state(TimelineState::can_redo)
    }

    /// Receiver woken each time the stored timeline is replaced.
    pub fn subscribe(&self) -> watch::Receiver<TimelineState<T>> {
        self.slot.subscribe()
    }
}
