#[cfg(feature = "std")]
pub(crate) type PositionMap<K> = std::collections::HashMap<K, (i32, i32)>;

#[cfg(not(feature = "std"))]
pub(crate) type PositionMap<K> = alloc::collections::BTreeMap<K, (i32, i32)>;
