use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{AnimationKind, ChangeSlot};

/// A lifecycle notification emitted by [`crate::ItemAnimator`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatorEvent<K> {
    AddStarting(K),
    AddFinished(K),
    RemoveStarting(K),
    RemoveFinished(K),
    MoveStarting(K),
    MoveFinished(K),
    ChangeStarting { key: K, slot: ChangeSlot },
    ChangeFinished { key: K, slot: ChangeSlot },
    /// Every pending queue and running set is empty.
    AnimationsFinished,
}

impl<K> AnimatorEvent<K> {
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::AddStarting(key)
            | Self::AddFinished(key)
            | Self::RemoveStarting(key)
            | Self::RemoveFinished(key)
            | Self::MoveStarting(key)
            | Self::MoveFinished(key)
            | Self::ChangeStarting { key, .. }
            | Self::ChangeFinished { key, .. } => Some(key),
            Self::AnimationsFinished => None,
        }
    }

    pub fn kind(&self) -> Option<AnimationKind> {
        match self {
            Self::AddStarting(_) | Self::AddFinished(_) => Some(AnimationKind::Add),
            Self::RemoveStarting(_) | Self::RemoveFinished(_) => Some(AnimationKind::Remove),
            Self::MoveStarting(_) | Self::MoveFinished(_) => Some(AnimationKind::Move),
            Self::ChangeStarting { .. } | Self::ChangeFinished { .. } => {
                Some(AnimationKind::Change)
            }
            Self::AnimationsFinished => None,
        }
    }

    /// `true` for the per-operation finished events (not for `AnimationsFinished`).
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            Self::AddFinished(_)
                | Self::RemoveFinished(_)
                | Self::MoveFinished(_)
                | Self::ChangeFinished { .. }
        )
    }

    pub(crate) fn starting(kind: AnimationKind, key: K, slot: Option<ChangeSlot>) -> Self {
        match kind {
            AnimationKind::Add => Self::AddStarting(key),
            AnimationKind::Remove => Self::RemoveStarting(key),
            AnimationKind::Move => Self::MoveStarting(key),
            AnimationKind::Change => Self::ChangeStarting {
                key,
                slot: slot.unwrap_or(ChangeSlot::Old),
            },
        }
    }

    pub(crate) fn finished(kind: AnimationKind, key: K, slot: Option<ChangeSlot>) -> Self {
        match kind {
            AnimationKind::Add => Self::AddFinished(key),
            AnimationKind::Remove => Self::RemoveFinished(key),
            AnimationKind::Move => Self::MoveFinished(key),
            AnimationKind::Change => Self::ChangeFinished {
                key,
                slot: slot.unwrap_or(ChangeSlot::Old),
            },
        }
    }
}

/// Receives the animator's lifecycle notifications.
///
/// Events are delivered after the public call that produced them has finished mutating the
/// animator, in the order they were produced. The default `on_event` routes each event to the
/// matching hook; every hook defaults to a no-op.
pub trait AnimatorListener<K> {
    fn on_add_starting(&mut self, _key: &K) {}
    fn on_add_finished(&mut self, _key: &K) {}
    fn on_remove_starting(&mut self, _key: &K) {}
    fn on_remove_finished(&mut self, _key: &K) {}
    fn on_move_starting(&mut self, _key: &K) {}
    fn on_move_finished(&mut self, _key: &K) {}
    fn on_change_starting(&mut self, _key: &K, _slot: ChangeSlot) {}
    fn on_change_finished(&mut self, _key: &K, _slot: ChangeSlot) {}
    fn on_animations_finished(&mut self) {}

    fn on_event(&mut self, event: &AnimatorEvent<K>) {
        match event {
            AnimatorEvent::AddStarting(key) => self.on_add_starting(key),
            AnimatorEvent::AddFinished(key) => self.on_add_finished(key),
            AnimatorEvent::RemoveStarting(key) => self.on_remove_starting(key),
            AnimatorEvent::RemoveFinished(key) => self.on_remove_finished(key),
            AnimatorEvent::MoveStarting(key) => self.on_move_starting(key),
            AnimatorEvent::MoveFinished(key) => self.on_move_finished(key),
            AnimatorEvent::ChangeStarting { key, slot } => self.on_change_starting(key, *slot),
            AnimatorEvent::ChangeFinished { key, slot } => self.on_change_finished(key, *slot),
            AnimatorEvent::AnimationsFinished => self.on_animations_finished(),
        }
    }
}

impl<K> AnimatorListener<K> for () {}

/// A listener that records every event in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog<K> {
    events: Vec<AnimatorEvent<K>>,
}

impl<K> EventLog<K> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[AnimatorEvent<K>] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<AnimatorEvent<K>> {
        core::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn animations_finished_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AnimatorEvent::AnimationsFinished))
            .count()
    }

    pub fn finished_count(&self, kind: AnimationKind) -> usize {
        self.events
            .iter()
            .filter(|e| e.is_finished() && e.kind() == Some(kind))
            .count()
    }
}

impl<K> Default for EventLog<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> AnimatorListener<K> for EventLog<K> {
    fn on_event(&mut self, event: &AnimatorEvent<K>) {
        self.events.push(event.clone());
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Work<K> {
    Emit(AnimatorEvent<K>),
    /// Report `AnimationsFinished` if the animator is quiescent once the queue is drained.
    CheckIdle,
}

/// FIFO worklist of notifications, drained once the outermost public call unwinds.
#[derive(Clone, Debug)]
pub(crate) struct Dispatcher<K> {
    queue: VecDeque<Work<K>>,
    depth: usize,
    idle_reported: bool,
}

impl<K> Dispatcher<K> {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            depth: 0,
            idle_reported: true,
        }
    }

    pub(crate) fn emit(&mut self, event: AnimatorEvent<K>) {
        self.queue.push_back(Work::Emit(event));
    }

    pub(crate) fn check_idle(&mut self) {
        self.queue.push_back(Work::CheckIdle);
    }

    /// Called whenever an operation enters a pending queue.
    pub(crate) fn arm(&mut self) {
        self.idle_reported = false;
    }

    /// Returns `true` if this idle period has not been reported yet, and marks it reported.
    pub(crate) fn claim_idle_report(&mut self) -> bool {
        !core::mem::replace(&mut self.idle_reported, true)
    }

    pub(crate) fn enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Returns `true` when the outermost call is unwinding and the queue should be drained.
    pub(crate) fn leave(&mut self) -> bool {
        debug_assert!(self.depth > 0, "dispatch depth underflow");
        self.depth = self.depth.saturating_sub(1);
        self.depth == 0
    }

    pub(crate) fn pop(&mut self) -> Option<Work<K>> {
        self.queue.pop_front()
    }
}
