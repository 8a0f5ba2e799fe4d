use alloc::sync::Arc;

use crate::{ChangeRequest, Easing, Fade, ItemAnimation};

/// Default duration shared by all four operation kinds unless overridden.
pub const DEFAULT_DURATION_MS: u64 = 250;

/// Decides whether a content change animates (`true`) or snaps (`false`).
pub type ShouldAnimateChangeCallback<K> =
    Arc<dyn Fn(&ChangeRequest<'_, K>) -> bool + Send + Sync>;

/// Visual hooks shared by every handle the animator drives.
pub type AnimationStyle = Arc<dyn ItemAnimation + Send + Sync>;

/// Configuration for [`crate::ItemAnimator`].
///
/// Cheap to clone: the style and policy live in `Arc`s, so adapters can tweak a duration and
/// call `ItemAnimator::set_options` without reallocating closures.
pub struct ItemAnimatorOptions<K> {
    pub add_duration_ms: u64,
    pub remove_duration_ms: u64,
    pub move_duration_ms: u64,
    pub change_duration_ms: u64,

    /// Curve for additions.
    pub enter_easing: Easing,
    /// Curve for removals.
    pub exit_easing: Easing,
    /// Curve for moves and changes.
    pub change_easing: Easing,

    /// Runs a batch as removals, then moves and changes, then additions.
    ///
    /// When disabled, every kind in a batch starts at once.
    pub sequence_phases: bool,

    /// Extra start delay added to each successive addition in a batch.
    pub add_stagger_ms: u64,

    pub style: AnimationStyle,

    /// Overrides the default change-eligibility policy.
    ///
    /// The default animates a change when at least one handle is present and no pending or
    /// running change already targets the same handle pair.
    pub should_animate_change: Option<ShouldAnimateChangeCallback<K>>,
}

impl<K> ItemAnimatorOptions<K> {
    pub fn new() -> Self {
        Self {
            add_duration_ms: DEFAULT_DURATION_MS,
            remove_duration_ms: DEFAULT_DURATION_MS,
            move_duration_ms: DEFAULT_DURATION_MS,
            change_duration_ms: DEFAULT_DURATION_MS,
            enter_easing: Easing::EaseOutCubic,
            exit_easing: Easing::EaseInCubic,
            change_easing: Easing::EaseInOutCubic,
            sequence_phases: true,
            add_stagger_ms: 0,
            style: Arc::new(Fade),
            should_animate_change: None,
        }
    }

    /// Sets all four durations.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.add_duration_ms = duration_ms;
        self.remove_duration_ms = duration_ms;
        self.move_duration_ms = duration_ms;
        self.change_duration_ms = duration_ms;
        self
    }

    pub fn with_add_duration(mut self, duration_ms: u64) -> Self {
        self.add_duration_ms = duration_ms;
        self
    }

    pub fn with_remove_duration(mut self, duration_ms: u64) -> Self {
        self.remove_duration_ms = duration_ms;
        self
    }

    pub fn with_move_duration(mut self, duration_ms: u64) -> Self {
        self.move_duration_ms = duration_ms;
        self
    }

    pub fn with_change_duration(mut self, duration_ms: u64) -> Self {
        self.change_duration_ms = duration_ms;
        self
    }

    pub fn with_easings(mut self, enter: Easing, exit: Easing, change: Easing) -> Self {
        self.enter_easing = enter;
        self.exit_easing = exit;
        self.change_easing = change;
        self
    }

    pub fn with_sequence_phases(mut self, sequence_phases: bool) -> Self {
        self.sequence_phases = sequence_phases;
        self
    }

    pub fn with_add_stagger(mut self, stagger_ms: u64) -> Self {
        self.add_stagger_ms = stagger_ms;
        self
    }

    pub fn with_style(mut self, style: impl ItemAnimation + Send + Sync + 'static) -> Self {
        self.style = Arc::new(style);
        self
    }

    pub fn with_should_animate_change(
        mut self,
        f: Option<impl Fn(&ChangeRequest<'_, K>) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.should_animate_change = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for ItemAnimatorOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ItemAnimatorOptions<K> {
    fn clone(&self) -> Self {
        Self {
            add_duration_ms: self.add_duration_ms,
            remove_duration_ms: self.remove_duration_ms,
            move_duration_ms: self.move_duration_ms,
            change_duration_ms: self.change_duration_ms,
            enter_easing: self.enter_easing,
            exit_easing: self.exit_easing,
            change_easing: self.change_easing,
            sequence_phases: self.sequence_phases,
            add_stagger_ms: self.add_stagger_ms,
            style: Arc::clone(&self.style),
            should_animate_change: self.should_animate_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ItemAnimatorOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemAnimatorOptions")
            .field("add_duration_ms", &self.add_duration_ms)
            .field("remove_duration_ms", &self.remove_duration_ms)
            .field("move_duration_ms", &self.move_duration_ms)
            .field("change_duration_ms", &self.change_duration_ms)
            .field("enter_easing", &self.enter_easing)
            .field("exit_easing", &self.exit_easing)
            .field("change_easing", &self.change_easing)
            .field("sequence_phases", &self.sequence_phases)
            .field("add_stagger_ms", &self.add_stagger_ms)
            .finish_non_exhaustive()
    }
}
