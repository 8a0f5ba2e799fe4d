use crate::{AnimationKind, ItemVisual};

/// A time-based interpolation of an item's visual state, driven by the adapter's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub kind: AnimationKind,
    pub from: ItemVisual,
    pub to: ItemVisual,
    /// When the transition starts moving (start delay already applied).
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
    pub(crate) started: bool,
}

impl Transition {
    pub fn new(
        kind: AnimationKind,
        from: ItemVisual,
        to: ItemVisual,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            kind,
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
            started: false,
        }
    }

    /// Whether the start delay has elapsed.
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.is_due(now_ms) && now_ms - self.start_ms >= self.duration_ms
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn sample(&self, now_ms: u64) -> ItemVisual {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        ItemVisual::lerp(self.from, self.to, self.easing.sample(t))
    }
}

/// Interpolation curves. Enter/exit/change curves are picked per operation kind in the options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Decelerating; the default enter curve.
    EaseOutCubic,
    /// Accelerating; the default exit curve.
    EaseInCubic,
    /// The default change/move curve.
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
