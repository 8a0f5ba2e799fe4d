use crate::{Edge, ItemVisual};

/// Per-kind visual hooks applied by [`crate::ItemAnimator`].
///
/// The `on_*` hooks prepare a handle's starting visual when a request is accepted; the `*_target`
/// hooks pick the visual a running transition eases towards. Adds, moves and the new side of a
/// change always ease back to [`ItemVisual::RESTING`].
///
/// Every method has a default, so a custom style only overrides what it changes.
pub trait ItemAnimation {
    fn on_add(&self, visual: &mut ItemVisual) {
        visual.opacity = 0.0;
    }

    fn on_remove(&self, _visual: &mut ItemVisual) {}

    /// Places a moving handle back at its old position; `dx`/`dy` is the layout delta.
    fn on_move(&self, visual: &mut ItemVisual, dx: i32, dy: i32) {
        visual.offset_x = -(dx as f32);
        visual.offset_y = -(dy as f32);
    }

    /// Prepares the handle that will show the updated content of a change.
    fn on_change_new(&self, visual: &mut ItemVisual, dx: i32, dy: i32) {
        visual.offset_x = -(dx as f32);
        visual.offset_y = -(dy as f32);
        visual.opacity = 0.0;
    }

    fn remove_target(&self, from: ItemVisual) -> ItemVisual {
        ItemVisual {
            opacity: 0.0,
            ..from
        }
    }

    /// Where the outgoing side of a change ends up: slid by the layout delta, fully faded.
    fn change_old_target(&self, _from: ItemVisual, dx: i32, dy: i32) -> ItemVisual {
        ItemVisual {
            offset_x: dx as f32,
            offset_y: dy as f32,
            opacity: 0.0,
        }
    }
}

/// Plain cross-fade. Uses every default hook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fade;

impl ItemAnimation for Fade {}

/// Fades added items in while sliding them from `edge` by `distance`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideIn {
    pub edge: Edge,
    pub distance: f32,
}

impl SlideIn {
    pub fn new(edge: Edge, distance: f32) -> Self {
        Self { edge, distance }
    }
}

impl ItemAnimation for SlideIn {
    fn on_add(&self, visual: &mut ItemVisual) {
        visual.opacity = 0.0;
        match self.edge {
            Edge::Top => visual.offset_y = -self.distance,
            Edge::Bottom => visual.offset_y = self.distance,
            Edge::Start => visual.offset_x = -self.distance,
            Edge::End => visual.offset_x = self.distance,
        }
    }
}
