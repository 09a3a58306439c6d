//! Timeline store: the imperative shell around the pure core.
//!
//! The core never holds state; something has to keep the latest timeline,
//! apply each request to it, and tell interested parties it changed. That is
//! the job of [`TimelineStore`].
//!
//! # Key Concepts
//!
//! - **Slot**: the latest `TimelineState`, replaced whole on every change
//! - **SetState**: a new value, or a function of the current one
//! - **Subscriptions**: `watch` receivers woken whenever the slot is replaced
//! - **Views**: owned projections recomputed on demand
//!
//! Writers are serialized by the slot, so concurrent callers never lose an
//! update to a stale read.

mod timeline_store;
mod update;
mod view;

pub use timeline_store::TimelineStore;
pub use update::SetState;
pub use view::TimelineView;
