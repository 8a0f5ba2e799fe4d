/// The transient visual properties of one item handle.
///
/// Offsets are relative to the item's laid-out position; `opacity` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemVisual {
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
}

impl ItemVisual {
    /// Fully visible, no offset. Forced finalization always leaves a handle in this state.
    pub const RESTING: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 1.0,
    };

    /// Fully transparent, no offset. Where a completed removal or outgoing change side ends.
    pub const HIDDEN: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 0.0,
    };

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }

    pub(crate) fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
        }
    }
}

impl Default for ItemVisual {
    fn default() -> Self {
        Self::RESTING
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKind {
    Add,
    Remove,
    Move,
    Change,
}

/// Which participant of a change a handle plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeSlot {
    /// The handle showing the previous content (fades out).
    Old,
    /// The handle showing the updated content (fades in).
    New,
}

/// One side of a [`ChangeRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeSide<K> {
    Active(K),
    Finished,
}

impl<K> ChangeSide<K> {
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Active(key) => Some(key),
            Self::Finished => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl<K> From<Option<K>> for ChangeSide<K> {
    fn from(key: Option<K>) -> Self {
        match key {
            Some(key) => Self::Active(key),
            None => Self::Finished,
        }
    }
}

/// Geometry of a pending or running move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord<K> {
    pub key: K,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

/// A content change, optionally pairing two distinct handles at the same logical position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeRecord<K> {
    pub old: ChangeSide<K>,
    pub new: ChangeSide<K>,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

impl<K: PartialEq> ChangeRecord<K> {
    pub fn side(&self, slot: ChangeSlot) -> &ChangeSide<K> {
        match slot {
            ChangeSlot::Old => &self.old,
            ChangeSlot::New => &self.new,
        }
    }

    /// Returns the slot `key` occupies, preferring `New` (matches the order sides are ended in).
    pub fn slot_of(&self, key: &K) -> Option<ChangeSlot> {
        if self.new.key() == Some(key) {
            Some(ChangeSlot::New)
        } else if self.old.key() == Some(key) {
            Some(ChangeSlot::Old)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        match (&self.old, &self.new) {
            (ChangeSide::Finished, ChangeSide::Finished) => true,
            (ChangeSide::Active(_), _) | (_, ChangeSide::Active(_)) => false,
        }
    }

    /// Marks `slot` finished and returns the key that occupied it.
    pub(crate) fn finish(&mut self, slot: ChangeSlot) -> Option<K> {
        let side = match slot {
            ChangeSlot::Old => &mut self.old,
            ChangeSlot::New => &mut self.new,
        };
        match core::mem::replace(side, ChangeSide::Finished) {
            ChangeSide::Active(key) => Some(key),
            ChangeSide::Finished => None,
        }
    }

    pub(crate) fn targets(&self, old: Option<&K>, new: Option<&K>) -> bool {
        self.old.key() == old && self.new.key() == new
    }

    pub fn delta_x(&self) -> i32 {
        self.to_x.saturating_sub(self.from_x)
    }

    pub fn delta_y(&self) -> i32 {
        self.to_y.saturating_sub(self.from_y)
    }
}

/// The arguments of a change request, as seen by the change-eligibility policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeRequest<'a, K> {
    pub old: Option<&'a K>,
    pub new: Option<&'a K>,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

/// The edge a sliding item enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
    Start,
    End,
}
