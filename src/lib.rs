//! Rewind: a bounded-history undo/redo timeline
//!
//! Rewind follows a "pure core, imperative shell" layout. The core is a
//! timeline value (snapshots plus a cursor) and a set of pure transitions
//! over it; the shell is a small store that keeps the latest timeline and
//! notifies subscribers when it changes.
//!
//! # Core Concepts
//!
//! - **Timeline**: ordered snapshots with a cursor on the current one
//! - **Transitions**: insert, undo, redo, jump and clear, each returning a new
//!   timeline and ignoring out-of-range requests
//! - **Store**: an atomically replaceable slot that applies transitions and
//!   wakes subscribers
//!
//! # Example
//!
//! ```rust
//! use rewind::core::TimelineState;
//!
//! let state = TimelineState::new(0);
//! let state = state.insert(1, 5);
//! let state = state.insert(2, 5);
//!
//! let state = state.undo_to(1);
//! assert!(state.can_redo());
//!
//! // Writing after an undo discards the future.
//! let state = state.insert(9, 5);
//! assert_eq!(state.timeline(), &[0, 1, 9]);
//!
//! let state = state.clear();
//! assert_eq!(state.timeline(), &[9]);
//! ```

pub mod config;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, TimelineConfig};
pub use self::core::{Seed, TimeSlice, TimelineAction, TimelineError, TimelineState};
pub use store::{SetState, TimelineStore, TimelineView};
