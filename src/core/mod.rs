//! Timeline engine: the pure core.
//!
//! This module contains the timeline value and every transition over it:
//! - `TimelineState`, the snapshots plus cursor, and its queries
//! - pure transitions (`insert`, `undo_to`, `redo_to`, `jump_to`, `clear`)
//! - `TimelineAction`, the same transitions as data
//!
//! Nothing in this module performs I/O or holds mutable state of its own.
//! Callers thread the latest timeline through each call and keep the result.

mod action;
mod error;
mod slice;
mod state;
mod transition;

pub use action::TimelineAction;
pub use error::TimelineError;
pub use slice::TimeSlice;
pub use state::{Seed, TimelineState};
