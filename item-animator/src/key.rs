#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Identity of an item handle.
///
/// Any cheap, clonable identity works: a recycled-slot index, a database id, a generational key.
/// With `std` the key must be hashable; without it the key must be `Ord`.
#[cfg(feature = "std")]
pub trait AnimatorKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> AnimatorKey for K {}

/// Identity of an item handle.
///
/// Any cheap, clonable identity works: a recycled-slot index, a database id, a generational key.
/// With `std` the key must be hashable; without it the key must be `Ord`.
#[cfg(not(feature = "std"))]
pub trait AnimatorKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> AnimatorKey for K {}
