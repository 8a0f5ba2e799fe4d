use alloc::vec::Vec;

/// Directions an item may be dragged or swiped in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementFlags {
    pub drag_up: bool,
    pub drag_down: bool,
    pub swipe_start: bool,
    pub swipe_end: bool,
}

impl MovementFlags {
    pub const NONE: Self = Self {
        drag_up: false,
        drag_down: false,
        swipe_start: false,
        swipe_end: false,
    };

    /// Drag up/down and swipe to either side.
    pub const ALL: Self = Self {
        drag_up: true,
        drag_down: true,
        swipe_start: true,
        swipe_end: true,
    };

    pub fn can_drag(&self) -> bool {
        self.drag_up || self.drag_down
    }

    pub fn can_swipe(&self) -> bool {
        self.swipe_start || self.swipe_end
    }
}

/// Receives the outcome of drag and swipe gestures, in adapter positions.
pub trait ItemTouchAdapter {
    /// An item was dragged from `from` over `to`. Returns whether the adapter moved it.
    fn on_item_move(&mut self, _from: usize, _to: usize) -> bool {
        false
    }

    /// The item at `position` was swiped away.
    fn on_item_dismiss(&mut self, _position: usize) {}
}

impl<T> ItemTouchAdapter for Vec<T> {
    fn on_item_move(&mut self, from: usize, to: usize) -> bool {
        if from >= self.len() || to >= self.len() {
            return false;
        }
        let item = self.remove(from);
        self.insert(to, item);
        true
    }

    fn on_item_dismiss(&mut self, position: usize) {
        if position < self.len() {
            self.remove(position);
        }
    }
}

/// Gesture configuration for a list: which directions are enabled, and routing of completed
/// gestures to an [`ItemTouchAdapter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchHelper {
    flags: MovementFlags,
}

impl TouchHelper {
    pub fn new(flags: MovementFlags) -> Self {
        Self { flags }
    }

    pub fn builder() -> TouchHelperBuilder {
        TouchHelperBuilder::new()
    }

    /// Both drag directions when `draggable`, both swipe directions when `swipeable`.
    pub fn simple(swipeable: bool, draggable: bool) -> Self {
        Self::new(MovementFlags {
            drag_up: draggable,
            drag_down: draggable,
            swipe_start: swipeable,
            swipe_end: swipeable,
        })
    }

    pub fn flags(&self) -> MovementFlags {
        self.flags
    }

    /// Long-press dragging is enabled when any drag direction is.
    pub fn is_long_press_drag_enabled(&self) -> bool {
        self.flags.can_drag()
    }

    pub fn is_swipe_enabled(&self) -> bool {
        self.flags.can_swipe()
    }

    /// Forwards a completed drag step and returns whether the adapter moved the item.
    ///
    /// Returns `false` without calling the adapter when dragging is disabled.
    pub fn on_move(&self, adapter: &mut impl ItemTouchAdapter, from: usize, to: usize) -> bool {
        if !self.is_long_press_drag_enabled() {
            return false;
        }
        ctrace!(from, to, "touch move");
        adapter.on_item_move(from, to)
    }

    /// Forwards a completed swipe. Ignored when swiping is disabled.
    pub fn on_swiped(&self, adapter: &mut impl ItemTouchAdapter, position: usize) {
        if !self.is_swipe_enabled() {
            return;
        }
        ctrace!(position, "touch dismiss");
        adapter.on_item_dismiss(position);
    }
}

impl Default for TouchHelper {
    fn default() -> Self {
        Self::new(MovementFlags::ALL)
    }
}

/// Builds a [`TouchHelper`]. Starts with every direction disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchHelperBuilder {
    flags: MovementFlags,
}

impl TouchHelperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(mut self, up: bool, down: bool) -> Self {
        self.flags.drag_up = up;
        self.flags.drag_down = down;
        self
    }

    pub fn drag_both(self) -> Self {
        self.drag(true, true)
    }

    pub fn swipe(mut self, start: bool, end: bool) -> Self {
        self.flags.swipe_start = start;
        self.flags.swipe_end = end;
        self
    }

    pub fn swipe_both(self) -> Self {
        self.swipe(true, true)
    }

    pub fn build(self) -> TouchHelper {
        TouchHelper::new(self.flags)
    }
}
