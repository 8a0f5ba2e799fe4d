use alloc::vec::Vec;

use item_animator::{
    AnimatorKey, AnimatorListener, ChangeSlot, ItemAnimator, ItemAnimatorOptions, ItemVisual,
    KindCounts,
};

use crate::key::PositionMap;

/// Where an item handle sits in one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement<K> {
    pub key: K,
    pub x: i32,
    pub y: i32,
}

impl<K> Placement<K> {
    pub fn new(key: K, x: i32, y: i32) -> Self {
        Self { key, x, y }
    }
}

/// A content change at one logical position: the handle that showed the previous content and
/// the handle bound to the updated content. The caller supplies distinct handles, or omits one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangedItem<K> {
    pub old: Option<K>,
    pub new: Option<K>,
}

impl<K: PartialEq> ChangedItem<K> {
    fn involves(&self, key: &K) -> bool {
        self.old.as_ref() == Some(key) || self.new.as_ref() == Some(key)
    }
}

/// Listener used by [`Controller`]: collects handles that left the list and tracks quiescence.
#[derive(Clone, Debug)]
pub struct RecycleQueue<K> {
    recyclable: Vec<K>,
    settled: bool,
}

impl<K> RecycleQueue<K> {
    pub fn new() -> Self {
        Self {
            recyclable: Vec::new(),
            settled: true,
        }
    }

    /// Handles whose removal (or outgoing side of a change) has finished, including declined
    /// changes.
    pub fn recyclable(&self) -> &[K] {
        &self.recyclable
    }

    /// `true` once all animations have finished, until the next layout queues more.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

impl<K> Default for RecycleQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> AnimatorListener<K> for RecycleQueue<K> {
    fn on_remove_finished(&mut self, key: &K) {
        self.recyclable.push(key.clone());
    }

    fn on_change_finished(&mut self, key: &K, slot: ChangeSlot) {
        if slot == ChangeSlot::Old {
            self.recyclable.push(key.clone());
        }
    }

    fn on_animations_finished(&mut self) {
        self.settled = true;
    }
}

/// A framework-neutral controller that wraps an `item_animator::ItemAnimator` and derives
/// animation requests from layout passes.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `apply_layout(pre, post, changed)` after each re-layout, with every handle's placement
///   before and after the dataset change
/// - `run_pending(now_ms)` once the new layout is committed
/// - `tick(now_ms)` each frame/timer tick, rendering each handle with `visual(&key)`
/// - `take_recyclable()` to reclaim handles that finished leaving the list
#[derive(Clone, Debug)]
pub struct Controller<K> {
    animator: ItemAnimator<K, RecycleQueue<K>>,
}

impl<K: AnimatorKey> Controller<K> {
    pub fn new(options: ItemAnimatorOptions<K>) -> Self {
        Self {
            animator: ItemAnimator::with_listener(options, RecycleQueue::new()),
        }
    }

    pub fn from_animator(animator: ItemAnimator<K, RecycleQueue<K>>) -> Self {
        Self { animator }
    }

    pub fn animator(&self) -> &ItemAnimator<K, RecycleQueue<K>> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ItemAnimator<K, RecycleQueue<K>> {
        &mut self.animator
    }

    pub fn into_animator(self) -> ItemAnimator<K, RecycleQueue<K>> {
        self.animator
    }

    /// Issues animation requests for the difference between two layout passes.
    ///
    /// - keys only in `post` are added
    /// - keys only in `pre` are removed
    /// - keys in both at different positions are moved
    /// - keys named by `changed` are animated as content changes, from the old handle's previous
    ///   position to the new handle's current one, and are not otherwise classified
    ///
    /// Returns how many requests of each kind were accepted.
    pub fn apply_layout(
        &mut self,
        pre: &[Placement<K>],
        post: &[Placement<K>],
        changed: &[ChangedItem<K>],
    ) -> KindCounts {
        let before = positions(pre);
        let after = positions(post);
        let in_change = |key: &K| changed.iter().any(|c| c.involves(key));
        let mut requested = KindCounts::default();

        for p in pre {
            if in_change(&p.key) || after.contains_key(&p.key) {
                continue;
            }
            if self.animator.request_remove(p.key.clone()) {
                requested.removes += 1;
            }
        }

        for p in post {
            if in_change(&p.key) {
                continue;
            }
            match before.get(&p.key) {
                None => {
                    if self.animator.request_add(p.key.clone()) {
                        requested.adds += 1;
                    }
                }
                Some(&(x, y)) if (x, y) != (p.x, p.y) => {
                    if self.animator.request_move(p.key.clone(), x, y, p.x, p.y) {
                        requested.moves += 1;
                    }
                }
                Some(_) => {}
            }
        }

        for c in changed {
            let old = c.old.as_ref();
            let new = c.new.as_ref();
            let from = old
                .and_then(|k| before.get(k))
                .or_else(|| new.and_then(|k| before.get(k)))
                .or_else(|| new.and_then(|k| after.get(k)))
                .copied()
                .unwrap_or((0, 0));
            let to = new
                .and_then(|k| after.get(k))
                .or_else(|| old.and_then(|k| after.get(k)))
                .copied()
                .unwrap_or(from);
            if self
                .animator
                .request_change(c.old.clone(), c.new.clone(), from.0, from.1, to.0, to.1)
            {
                requested.changes += 1;
            }
        }

        // Handles that are laid out again are in use, whatever they finished earlier.
        let running = self.animator.is_running();
        let queue = self.animator.listener_mut();
        queue.recyclable.retain(|k| !after.contains_key(k));
        if running {
            queue.settled = false;
        }

        cdebug!(
            adds = requested.adds,
            removes = requested.removes,
            moves = requested.moves,
            changes = requested.changes,
            "apply_layout"
        );
        requested
    }

    pub fn run_pending(&mut self, now_ms: u64) {
        self.animator.run_pending_animations(now_ms);
    }

    /// Advances every running animation. Returns `true` while anything is pending or running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.animator.tick(now_ms)
    }

    pub fn visual(&self, key: &K) -> ItemVisual {
        self.animator.visual(key)
    }

    /// Finalizes every animation of `key`, e.g. when the host reclaims the handle early.
    pub fn end_animation(&mut self, key: &K) {
        self.animator.end_animation(key);
    }

    /// Drains the handles that finished leaving the list and returns them at rest.
    ///
    /// A handle still taking part in another animation stays queued until that one finishes too.
    pub fn take_recyclable(&mut self) -> Vec<K> {
        let finished = core::mem::take(&mut self.animator.listener_mut().recyclable);
        let mut out: Vec<K> = Vec::with_capacity(finished.len());
        let mut busy: Vec<K> = Vec::new();
        for key in finished {
            if out.contains(&key) || busy.contains(&key) {
                continue;
            }
            if self.animator.is_pending(&key) || self.animator.is_animating(&key) {
                busy.push(key);
                continue;
            }
            self.animator.end_animation(&key);
            out.push(key);
        }
        self.animator.listener_mut().recyclable = busy;
        out
    }

    pub fn is_settled(&self) -> bool {
        self.animator.listener().is_settled()
    }

    /// Finalizes everything, e.g. when the list is detached.
    pub fn teardown(&mut self) {
        ctrace!("Controller::teardown");
        self.animator.end_animations();
    }
}

fn positions<K: AnimatorKey>(placements: &[Placement<K>]) -> PositionMap<K> {
    let mut map = PositionMap::new();
    for p in placements {
        map.insert(p.key.clone(), (p.x, p.y));
    }
    map
}
