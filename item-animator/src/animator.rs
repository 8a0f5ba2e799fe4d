use alloc::vec::Vec;
use core::mem;

use crate::dispatch::{Dispatcher, Work};
use crate::key::{AnimatorKey, KeyMap};
use crate::{
    AnimationKind, AnimatorEvent, AnimatorListener, AnimatorState, ChangeRecord, ChangeRequest,
    ChangeSlot, ItemAnimatorOptions, ItemVisual, KindCounts, MoveRecord, Transition,
};

/// The animator's view of one item handle: its visual state and the transition driving it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle {
    pub visual: ItemVisual,
    pub transition: Option<Transition>,
}

impl ItemHandle {
    fn resting() -> Self {
        Self {
            visual: ItemVisual::RESTING,
            transition: None,
        }
    }
}

/// A headless coordinator for add/remove/move/change item animations.
///
/// This type holds no UI objects:
/// - Your adapter identifies each on-screen item by a key `K` and issues `request_*` calls as
///   the dataset changes.
/// - `run_pending_animations` starts everything requested since the last layout pass.
/// - `tick(now_ms)` advances transitions; render each item using [`ItemAnimator::visual`].
/// - Lifecycle events are delivered to the listener `L` once the call that produced them has
///   finished mutating the animator.
///
/// Handles that are at rest and not animating are not stored; `visual` reports
/// [`ItemVisual::RESTING`] for them. A removal, or the outgoing side of a change, that runs to
/// completion leaves its handle [`ItemVisual::HIDDEN`] until `end_animation` reclaims it.
#[derive(Clone, Debug)]
pub struct ItemAnimator<K, L = ()> {
    options: ItemAnimatorOptions<K>,
    listener: L,
    handles: KeyMap<K, ItemHandle>,

    pending_adds: Vec<K>,
    pending_removes: Vec<K>,
    pending_moves: Vec<MoveRecord<K>>,
    pending_changes: Vec<ChangeRecord<K>>,

    running_adds: Vec<K>,
    running_removes: Vec<K>,
    running_moves: Vec<K>,
    running_changes: Vec<ChangeRecord<K>>,

    dispatch: Dispatcher<K>,
}

impl<K: AnimatorKey> ItemAnimator<K> {
    pub fn new(options: ItemAnimatorOptions<K>) -> Self {
        Self::with_listener(options, ())
    }
}

impl<K: AnimatorKey, L: AnimatorListener<K>> ItemAnimator<K, L> {
    pub fn with_listener(options: ItemAnimatorOptions<K>, listener: L) -> Self {
        adebug!(
            add_ms = options.add_duration_ms,
            remove_ms = options.remove_duration_ms,
            move_ms = options.move_duration_ms,
            change_ms = options.change_duration_ms,
            "ItemAnimator::new"
        );
        Self {
            options,
            listener,
            handles: KeyMap::new(),
            pending_adds: Vec::new(),
            pending_removes: Vec::new(),
            pending_moves: Vec::new(),
            pending_changes: Vec::new(),
            running_adds: Vec::new(),
            running_removes: Vec::new(),
            running_moves: Vec::new(),
            running_changes: Vec::new(),
            dispatch: Dispatcher::new(),
        }
    }

    pub fn options(&self) -> &ItemAnimatorOptions<K> {
        &self.options
    }

    /// Replaces the options. Transitions already running keep their duration and curve.
    pub fn set_options(&mut self, options: ItemAnimatorOptions<K>) {
        self.options = options;
        atrace!("ItemAnimator::set_options");
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ItemAnimatorOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The visual state to render `key` with.
    pub fn visual(&self, key: &K) -> ItemVisual {
        self.handles
            .get(key)
            .map(|h| h.visual)
            .unwrap_or(ItemVisual::RESTING)
    }

    pub fn handle(&self, key: &K) -> Option<&ItemHandle> {
        self.handles.get(key)
    }

    /// Overrides the visual of `key`, e.g. while the host drags it.
    ///
    /// A later `request_move` accounts for the carried offset. If `key` is animating, the next
    /// `tick` overwrites the value.
    pub fn set_visual(&mut self, key: K, visual: ItemVisual) {
        update_visual(&mut self.handles, key, |v| *v = visual);
    }

    /// Visits every handle that is animating or away from its resting visual.
    pub fn for_each_handle(&self, mut f: impl FnMut(&K, &ItemHandle)) {
        for (key, handle) in self.handles.iter() {
            f(key, handle);
        }
    }

    /// `true` while any pending queue or running set is non-empty.
    pub fn is_running(&self) -> bool {
        !self.pending_adds.is_empty()
            || !self.pending_removes.is_empty()
            || !self.pending_moves.is_empty()
            || !self.pending_changes.is_empty()
            || !self.running_adds.is_empty()
            || !self.running_removes.is_empty()
            || !self.running_moves.is_empty()
            || !self.running_changes.is_empty()
    }

    pub fn state(&self) -> AnimatorState {
        AnimatorState {
            pending: KindCounts {
                adds: self.pending_adds.len(),
                removes: self.pending_removes.len(),
                moves: self.pending_moves.len(),
                changes: self.pending_changes.len(),
            },
            running: KindCounts {
                adds: self.running_adds.len(),
                removes: self.running_removes.len(),
                moves: self.running_moves.len(),
                changes: self.running_changes.len(),
            },
        }
    }

    pub fn pending_moves(&self) -> &[MoveRecord<K>] {
        &self.pending_moves
    }

    pub fn pending_changes(&self) -> &[ChangeRecord<K>] {
        &self.pending_changes
    }

    pub fn running_changes(&self) -> &[ChangeRecord<K>] {
        &self.running_changes
    }

    /// Whether `key` waits in any pending queue.
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending_adds.contains(key)
            || self.pending_removes.contains(key)
            || self.pending_moves.iter().any(|r| r.key == *key)
            || self.pending_changes.iter().any(|r| r.slot_of(key).is_some())
    }

    /// Whether `key` is in any running set.
    pub fn is_animating(&self, key: &K) -> bool {
        self.running_adds.contains(key)
            || self.running_removes.contains(key)
            || self.running_moves.contains(key)
            || self.running_changes.iter().any(|r| r.slot_of(key).is_some())
    }

    /// Whether a changed item may be rebound in place instead of being paired with a fresh
    /// handle. Changes that carry a payload can reuse the handle.
    pub fn can_reuse_updated_item(&self, has_payload: bool) -> bool {
        has_payload
    }

    /// Queues a fade-in for `key`. Always returns `true`.
    pub fn request_add(&mut self, key: K) -> bool {
        atrace!("request_add");
        self.dispatched(|a| {
            a.end_animation_inner(&key);
            let style = &a.options.style;
            update_visual(&mut a.handles, key.clone(), |v| style.on_add(v));
            a.pending_adds.push(key);
            a.dispatch.arm();
            true
        })
    }

    /// Queues a fade-out for `key`. Always returns `true`.
    pub fn request_remove(&mut self, key: K) -> bool {
        atrace!("request_remove");
        self.dispatched(|a| {
            a.end_animation_inner(&key);
            let style = &a.options.style;
            update_visual(&mut a.handles, key.clone(), |v| style.on_remove(v));
            a.pending_removes.push(key);
            a.dispatch.arm();
            true
        })
    }

    /// Queues a move of `key` from its old layout position to its new one.
    ///
    /// Any offset the handle still carries (an interrupted animation, a drag) is folded into the
    /// start position. Returns `false` when there is nothing to animate; `MoveFinished` is then
    /// delivered before this call returns.
    pub fn request_move(&mut self, key: K, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        atrace!(from_x, from_y, to_x, to_y, "request_move");
        self.dispatched(|a| a.request_move_inner(key, from_x, from_y, to_x, to_y))
    }

    /// Queues a content change at one logical position.
    ///
    /// `old` shows the previous content and fades out; `new` shows the updated content and fades
    /// in. Either may be absent. A change that reuses one handle (`old == new`) is animated as a
    /// move. Returns `false` when the change-eligibility policy declines it; `ChangeFinished` is
    /// then delivered for each given handle before this call returns.
    pub fn request_change(
        &mut self,
        old: Option<K>,
        new: Option<K>,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> bool {
        atrace!(from_x, from_y, to_x, to_y, "request_change");
        let request = ChangeRequest {
            old: old.as_ref(),
            new: new.as_ref(),
            from_x,
            from_y,
            to_x,
            to_y,
        };
        if !self.should_animate_change(&request) {
            atrace!("request_change declined");
            self.dispatched(|a| {
                let same = old.is_some() && old == new;
                if let Some(key) = old {
                    a.dispatch.emit(AnimatorEvent::ChangeFinished {
                        key,
                        slot: ChangeSlot::Old,
                    });
                }
                if let Some(key) = new.filter(|_| !same) {
                    a.dispatch.emit(AnimatorEvent::ChangeFinished {
                        key,
                        slot: ChangeSlot::New,
                    });
                }
            });
            return false;
        }

        self.dispatched(|a| {
            match (old, new) {
                (None, None) => false,
                (Some(old), Some(new)) if old == new => {
                    a.request_move_inner(old, from_x, from_y, to_x, to_y)
                }
                (old, new) => {
                    let carried = old
                        .as_ref()
                        .map(|k| a.visual(k))
                        .unwrap_or(ItemVisual::RESTING);
                    let dx = (to_x.saturating_sub(from_x) as f32 - carried.offset_x) as i32;
                    let dy = (to_y.saturating_sub(from_y) as f32 - carried.offset_y) as i32;

                    if let Some(old) = &old {
                        a.end_animation_inner(old);
                        // Keep showing the outgoing content where it currently is.
                        update_visual(&mut a.handles, old.clone(), |v| *v = carried);
                    }
                    if let Some(new) = &new {
                        a.end_animation_inner(new);
                        let style = &a.options.style;
                        update_visual(&mut a.handles, new.clone(), |v| {
                            style.on_change_new(v, dx, dy)
                        });
                    }

                    a.pending_changes.push(ChangeRecord {
                        old: old.into(),
                        new: new.into(),
                        from_x,
                        from_y,
                        to_x,
                        to_y,
                    });
                    a.dispatch.arm();
                    true
                }
            }
        })
    }

    /// Starts every pending operation.
    ///
    /// With `sequence_phases`, removals start at `now_ms`, moves and changes start once the
    /// removals are done, and additions start after those.
    pub fn run_pending_animations(&mut self, now_ms: u64) {
        self.dispatched(|a| a.run_pending_inner(now_ms));
    }

    /// Advances every running transition to `now_ms`.
    ///
    /// Returns `true` while anything is still pending or running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.dispatched(|a| {
            for key in a.running_keys() {
                let (kind, started_now, done) = {
                    let Some(handle) = a.handles.get_mut(&key) else {
                        continue;
                    };
                    let Some(transition) = handle.transition.as_mut() else {
                        continue;
                    };
                    if !transition.is_due(now_ms) {
                        continue;
                    }
                    let started_now = !mem::replace(&mut transition.started, true);
                    handle.visual = transition.sample(now_ms);
                    (transition.kind, started_now, transition.is_done(now_ms))
                };

                if started_now {
                    let slot = a.running_change_slot(&key);
                    a.dispatch.emit(AnimatorEvent::starting(kind, key.clone(), slot));
                }
                if done {
                    a.finish_transition(&key, true);
                }
            }
            a.is_running()
        })
    }

    /// Forcibly finalizes every operation involving `key`, leaving it at rest.
    ///
    /// Call this when a handle is reclaimed before its animation ends. Each finished event for
    /// `key` is still delivered exactly once.
    pub fn end_animation(&mut self, key: &K) {
        self.dispatched(|a| a.end_animation_inner(key));
    }

    /// Finalizes everything, then reports `AnimationsFinished` once.
    ///
    /// Pending moves, removals, additions and changes are drained in that order, then every
    /// running transition is cancelled. Does nothing when the animator is idle.
    pub fn end_animations(&mut self) {
        self.dispatched(|a| {
            if !a.is_running() {
                return;
            }
            adebug!(
                pending = a.state().pending.total(),
                running = a.state().running.total(),
                "end_animations"
            );

            for record in mem::take(&mut a.pending_moves) {
                a.handles.remove(&record.key);
                a.dispatch.emit(AnimatorEvent::MoveFinished(record.key));
            }
            for key in mem::take(&mut a.pending_removes) {
                a.handles.remove(&key);
                a.dispatch.emit(AnimatorEvent::RemoveFinished(key));
            }
            for key in mem::take(&mut a.pending_adds) {
                a.handles.remove(&key);
                a.dispatch.emit(AnimatorEvent::AddFinished(key));
            }
            for mut record in mem::take(&mut a.pending_changes) {
                for slot in [ChangeSlot::Old, ChangeSlot::New] {
                    if let Some(key) = record.finish(slot) {
                        a.handles.remove(&key);
                        a.dispatch.emit(AnimatorEvent::ChangeFinished { key, slot });
                    }
                }
            }

            for key in a.running_removes.clone() {
                a.finish_transition(&key, false);
            }
            for key in a.running_moves.clone() {
                a.finish_transition(&key, false);
            }
            for key in a.running_adds.clone() {
                a.finish_transition(&key, false);
            }
            for key in running_change_keys(&a.running_changes) {
                a.finish_transition(&key, false);
            }

            if a.is_running() {
                awarn!("end_animations: running sets not empty after cancelling transitions");
                debug_assert!(!a.is_running(), "running sets not empty after end_animations");
                a.running_adds.clear();
                a.running_removes.clear();
                a.running_moves.clear();
                a.running_changes.clear();
            }

            a.dispatch.claim_idle_report();
            a.dispatch.emit(AnimatorEvent::AnimationsFinished);
        });
    }

    fn request_move_inner(
        &mut self,
        key: K,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> bool {
        let carried = self.visual(&key);
        let from_x = from_x.saturating_add(carried.offset_x as i32);
        let from_y = from_y.saturating_add(carried.offset_y as i32);
        self.end_animation_inner(&key);

        let dx = to_x.saturating_sub(from_x);
        let dy = to_y.saturating_sub(from_y);
        if dx == 0 && dy == 0 {
            self.dispatch.emit(AnimatorEvent::MoveFinished(key));
            return false;
        }

        let style = &self.options.style;
        update_visual(&mut self.handles, key.clone(), |v| style.on_move(v, dx, dy));
        self.pending_moves.push(MoveRecord {
            key,
            from_x,
            from_y,
            to_x,
            to_y,
        });
        self.dispatch.arm();
        true
    }

    fn should_animate_change(&self, request: &ChangeRequest<'_, K>) -> bool {
        if let Some(f) = &self.options.should_animate_change {
            return f(request);
        }
        if request.old.is_none() && request.new.is_none() {
            return false;
        }
        !self
            .pending_changes
            .iter()
            .chain(self.running_changes.iter())
            .any(|r| r.targets(request.old, request.new))
    }

    fn run_pending_inner(&mut self, now_ms: u64) {
        let removals = !self.pending_removes.is_empty();
        let moves = !self.pending_moves.is_empty();
        let changes = !self.pending_changes.is_empty();
        let additions = !self.pending_adds.is_empty();
        if !removals && !moves && !changes && !additions {
            return;
        }
        adebug!(
            removals = self.pending_removes.len(),
            moves = self.pending_moves.len(),
            changes = self.pending_changes.len(),
            additions = self.pending_adds.len(),
            "run_pending_animations"
        );

        let opts = &self.options;
        let sequenced = opts.sequence_phases;
        let remove_ms = opts.remove_duration_ms;
        let move_ms = opts.move_duration_ms;
        let change_ms = opts.change_duration_ms;
        let add_ms = opts.add_duration_ms;
        let (enter, exit, change) = (opts.enter_easing, opts.exit_easing, opts.change_easing);
        let stagger_ms = opts.add_stagger_ms;
        let style = alloc::sync::Arc::clone(&opts.style);

        for key in mem::take(&mut self.pending_removes) {
            let from = self.visual(&key);
            let to = style.remove_target(from);
            self.start_transition(&key, AnimationKind::Remove, to, now_ms, remove_ms, exit);
            self.running_removes.push(key);
        }

        let after_removals = if sequenced && removals {
            now_ms.saturating_add(remove_ms)
        } else {
            now_ms
        };

        for record in mem::take(&mut self.pending_moves) {
            self.start_transition(
                &record.key,
                AnimationKind::Move,
                ItemVisual::RESTING,
                after_removals,
                move_ms,
                change,
            );
            self.running_moves.push(record.key);
        }

        for record in mem::take(&mut self.pending_changes) {
            if let Some(old) = record.old.key() {
                let to = style.change_old_target(
                    self.visual(old),
                    record.delta_x(),
                    record.delta_y(),
                );
                self.start_transition(
                    old,
                    AnimationKind::Change,
                    to,
                    after_removals,
                    change_ms,
                    change,
                );
            }
            if let Some(new) = record.new.key() {
                self.start_transition(
                    new,
                    AnimationKind::Change,
                    ItemVisual::RESTING,
                    after_removals,
                    change_ms,
                    change,
                );
            }
            self.running_changes.push(record);
        }

        let additions_at = if sequenced && (removals || moves || changes) {
            let remove_part = if removals { remove_ms } else { 0 };
            let move_part = if moves { move_ms } else { 0 };
            let change_part = if changes { change_ms } else { 0 };
            now_ms
                .saturating_add(remove_part)
                .saturating_add(move_part.max(change_part))
        } else {
            now_ms
        };

        for (i, key) in mem::take(&mut self.pending_adds).into_iter().enumerate() {
            let start = additions_at.saturating_add(stagger_ms.saturating_mul(i as u64));
            self.start_transition(
                &key,
                AnimationKind::Add,
                ItemVisual::RESTING,
                start,
                add_ms,
                enter,
            );
            self.running_adds.push(key);
        }
    }

    fn start_transition(
        &mut self,
        key: &K,
        kind: AnimationKind,
        to: ItemVisual,
        start_ms: u64,
        duration_ms: u64,
        easing: crate::Easing,
    ) {
        let handle = self
            .handles
            .entry(key.clone())
            .or_insert_with(ItemHandle::resting);
        handle.transition = Some(Transition::new(
            kind,
            handle.visual,
            to,
            start_ms,
            duration_ms,
            easing,
        ));
    }

    /// Ends the running transition of `key`: the handle leaves its running set and its finished
    /// event is queued. A cancelled transition goes back to rest; a completed removal or outgoing
    /// change side stays hidden.
    ///
    /// Returns `false` if `key` had no transition.
    fn finish_transition(&mut self, key: &K, completed: bool) -> bool {
        let Some(transition) = self
            .handles
            .get_mut(key)
            .and_then(|handle| handle.transition.take())
        else {
            return false;
        };
        self.handles.remove(key);

        let mut slot = None;
        let found = match transition.kind {
            AnimationKind::Add => remove_key(&mut self.running_adds, key),
            AnimationKind::Remove => remove_key(&mut self.running_removes, key),
            AnimationKind::Move => remove_key(&mut self.running_moves, key),
            AnimationKind::Change => {
                let position = self
                    .running_changes
                    .iter()
                    .position(|r| r.slot_of(key).is_some());
                match position {
                    Some(i) => {
                        let record = &mut self.running_changes[i];
                        slot = record.slot_of(key);
                        if let Some(slot) = slot {
                            record.finish(slot);
                        }
                        if record.is_finished() {
                            self.running_changes.remove(i);
                        }
                        true
                    }
                    None => false,
                }
            }
        };
        if !found {
            awarn!(kind = ?transition.kind, "finished transition was not in its running set");
            debug_assert!(found, "finished transition was not in its running set");
        }

        let hidden = completed
            && match transition.kind {
                AnimationKind::Remove => true,
                AnimationKind::Change => slot == Some(ChangeSlot::Old),
                AnimationKind::Add | AnimationKind::Move => false,
            };
        if hidden {
            self.handles.insert(
                key.clone(),
                ItemHandle {
                    visual: ItemVisual::HIDDEN,
                    transition: None,
                },
            );
        }

        self.dispatch
            .emit(AnimatorEvent::finished(transition.kind, key.clone(), slot));
        self.dispatch.check_idle();
        true
    }

    fn end_animation_inner(&mut self, key: &K) {
        self.finish_transition(key, false);

        let mut i = self.pending_moves.len();
        while i > 0 {
            i -= 1;
            if self.pending_moves[i].key == *key {
                let record = self.pending_moves.remove(i);
                self.handles.remove(key);
                self.dispatch.emit(AnimatorEvent::MoveFinished(record.key));
            }
        }

        let mut i = self.pending_changes.len();
        while i > 0 {
            i -= 1;
            let record = &mut self.pending_changes[i];
            let mut ended = [None, None];
            for (n, slot) in [ChangeSlot::New, ChangeSlot::Old].into_iter().enumerate() {
                if record.side(slot).key() == Some(key) {
                    record.finish(slot);
                    ended[n] = Some(slot);
                }
            }
            let finished = record.is_finished();
            for slot in ended.into_iter().flatten() {
                self.handles.remove(key);
                self.dispatch.emit(AnimatorEvent::ChangeFinished {
                    key: key.clone(),
                    slot,
                });
            }
            if finished {
                self.pending_changes.remove(i);
            }
        }

        if remove_key(&mut self.pending_removes, key) {
            self.handles.remove(key);
            self.dispatch.emit(AnimatorEvent::RemoveFinished(key.clone()));
        }
        if remove_key(&mut self.pending_adds, key) {
            self.handles.remove(key);
            self.dispatch.emit(AnimatorEvent::AddFinished(key.clone()));
        }

        // Cancelling the transition above must have taken `key` out of every running set.
        if self.is_animating(key) {
            awarn!("end_animation: handle still in a running set after cancellation");
            debug_assert!(
                !self.is_animating(key),
                "handle still in a running set after cancellation"
            );
            self.running_adds.retain(|k| k != key);
            self.running_removes.retain(|k| k != key);
            self.running_moves.retain(|k| k != key);
            for record in self.running_changes.iter_mut() {
                while let Some(slot) = record.slot_of(key) {
                    record.finish(slot);
                }
            }
            self.running_changes.retain(|r| !r.is_finished());
        }

        // A handle left hidden by a completed removal is reclaimed at rest.
        self.handles.remove(key);
        self.dispatch.check_idle();
    }

    fn running_change_slot(&self, key: &K) -> Option<ChangeSlot> {
        self.running_changes.iter().find_map(|r| r.slot_of(key))
    }

    fn running_keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(
            self.running_removes.len()
                + self.running_moves.len()
                + self.running_changes.len() * 2
                + self.running_adds.len(),
        );
        keys.extend(self.running_removes.iter().cloned());
        keys.extend(self.running_moves.iter().cloned());
        keys.extend(running_change_keys(&self.running_changes));
        keys.extend(self.running_adds.iter().cloned());
        keys
    }

    /// Runs `f`, then drains the notification worklist if this is the outermost call.
    fn dispatched<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.dispatch.enter();
        let out = f(self);
        if self.dispatch.leave() {
            self.drain();
        }
        out
    }

    /// Delivers queued events in order. Idle checks are folded into one, evaluated after the
    /// last event so `AnimationsFinished` always trails the finishes that caused it.
    fn drain(&mut self) {
        let mut check_idle = false;
        while let Some(work) = self.dispatch.pop() {
            match work {
                Work::Emit(event) => self.listener.on_event(&event),
                Work::CheckIdle => check_idle = true,
            }
        }
        if check_idle && !self.is_running() && self.dispatch.claim_idle_report() {
            adebug!("animations finished");
            self.listener.on_event(&AnimatorEvent::AnimationsFinished);
        }
    }
}

fn update_visual<K: AnimatorKey>(
    handles: &mut KeyMap<K, ItemHandle>,
    key: K,
    f: impl FnOnce(&mut ItemVisual),
) {
    let handle = handles.entry(key.clone()).or_insert_with(ItemHandle::resting);
    f(&mut handle.visual);
    if handle.transition.is_none() && handle.visual.is_resting() {
        handles.remove(&key);
    }
}

fn remove_key<K: PartialEq>(keys: &mut Vec<K>, key: &K) -> bool {
    match keys.iter().position(|k| k == key) {
        Some(i) => {
            keys.remove(i);
            true
        }
        None => false,
    }
}

fn running_change_keys<K: Clone>(records: &[ChangeRecord<K>]) -> Vec<K> {
    records
        .iter()
        .flat_map(|r| [r.old.key(), r.new.key()])
        .flatten()
        .cloned()
        .collect()
}
