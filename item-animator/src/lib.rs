//! A headless animation coordinator for recycled list views.
//!
//! For adapter-level utilities (placeholder rows, diff delivery, layout-driven requests), see the
//! `item-animator-adapter` crate.
//!
//! As a backing dataset mutates, a list adapter asks the [`ItemAnimator`] to animate item
//! additions, removals, moves and content changes. The animator keeps the pending and running
//! bookkeeping for each kind, interpolates every item's offset and opacity, and guarantees:
//!
//! - a forcibly finalized handle is always returned to its resting visual (no offset, fully
//!   opaque); removals and outgoing change sides that complete are left hidden,
//! - every requested operation is finalized exactly once, even when interrupted or cancelled,
//! - "all animations finished" is reported once per idle period, never before the last
//!   pending or running operation completes.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a stable key per on-screen item handle
//! - old/new layout positions for moved and changed items
//! - a clock (`now_ms`) for `run_pending_animations` and `tick`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod dispatch;
mod key;
mod options;
mod state;
mod style;
mod transition;
mod types;


pub use animator::{ItemAnimator, ItemHandle};
pub use dispatch::{AnimatorEvent, AnimatorListener, EventLog};
pub use key::AnimatorKey;
pub use options::{
    AnimationStyle, DEFAULT_DURATION_MS, ItemAnimatorOptions, ShouldAnimateChangeCallback,
};
pub use state::{AnimatorState, KindCounts};
pub use style::{Fade, ItemAnimation, SlideIn};
pub use transition::{Easing, Transition};
pub use types::{
    AnimationKind, ChangeRecord, ChangeRequest, ChangeSide, ChangeSlot, Edge, ItemVisual,
    MoveRecord,
};
