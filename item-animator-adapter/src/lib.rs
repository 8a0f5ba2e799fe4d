//! Adapter utilities for the `item-animator` crate.
//!
//! The `item-animator` crate is UI-agnostic and only coordinates animation state. This crate
//! provides small, framework-neutral helpers commonly needed by list adapters:
//!
//! - A layout-diffing controller that turns pre/post placements into animation requests and
//!   tracks which handles may be recycled
//! - Loading/empty placeholder rows for datasets that are absent or empty
//! - Delivery of precomputed list updates alongside the data they describe
//! - Drag/swipe gesture configuration
//! - Grid span computation
//!
//! This crate is framework-agnostic (no widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod dataset;
mod diff;
mod grid;
mod key;
mod touch;

#[cfg(test)]
mod tests;

pub use controller::{ChangedItem, Controller, Placement, RecycleQueue};
pub use dataset::{Placeholders, ViewType};
pub use diff::{DiffResult, ListUpdate, ListUpdateCallback};
pub use grid::span_count;
pub use touch::{ItemTouchAdapter, MovementFlags, TouchHelper, TouchHelperBuilder};
