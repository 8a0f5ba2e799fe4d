/// Per-kind counts of one group of collections (pending queues or running sets).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindCounts {
    pub adds: usize,
    pub removes: usize,
    pub moves: usize,
    pub changes: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.adds + self.removes + self.moves + self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A lightweight snapshot of the animator's bookkeeping.
///
/// `running.changes` counts change records, not handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatorState {
    pub pending: KindCounts,
    pub running: KindCounts,
}

impl AnimatorState {
    pub fn is_running(&self) -> bool {
        !self.pending.is_empty() || !self.running.is_empty()
    }
}
