use alloc::vec::Vec;

/// One structural update between two versions of a list, in the order a diff produced it.
///
/// Positions are in the list as it stands when the update is applied, so updates must be
/// replayed in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListUpdate<P = ()> {
    Inserted {
        position: usize,
        count: usize,
    },
    Removed {
        position: usize,
        count: usize,
    },
    Moved {
        from: usize,
        to: usize,
    },
    /// Contents changed in place. A payload describes a partial change; items updated with a
    /// payload can reuse their handle (see `ItemAnimator::can_reuse_updated_item`).
    Changed {
        position: usize,
        count: usize,
        payload: Option<P>,
    },
}

impl<P> ListUpdate<P> {
    /// Routes this update to the matching callback hook.
    pub fn dispatch_to<C: ListUpdateCallback<P> + ?Sized>(&self, callback: &mut C) {
        match self {
            Self::Inserted { position, count } => callback.on_inserted(*position, *count),
            Self::Removed { position, count } => callback.on_removed(*position, *count),
            Self::Moved { from, to } => callback.on_moved(*from, *to),
            Self::Changed {
                position,
                count,
                payload,
            } => callback.on_changed(*position, *count, payload.as_ref()),
        }
    }
}

/// Receives list updates, typically a list adapter that forwards them to an
/// [`item_animator::ItemAnimator`] as it re-lays out.
pub trait ListUpdateCallback<P = ()> {
    fn on_inserted(&mut self, position: usize, count: usize);
    fn on_removed(&mut self, position: usize, count: usize);
    fn on_moved(&mut self, from: usize, to: usize);
    fn on_changed(&mut self, position: usize, count: usize, payload: Option<&P>);
}

impl<P: Clone> ListUpdateCallback<P> for Vec<ListUpdate<P>> {
    fn on_inserted(&mut self, position: usize, count: usize) {
        self.push(ListUpdate::Inserted { position, count });
    }

    fn on_removed(&mut self, position: usize, count: usize) {
        self.push(ListUpdate::Removed { position, count });
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        self.push(ListUpdate::Moved { from, to });
    }

    fn on_changed(&mut self, position: usize, count: usize, payload: Option<&P>) {
        self.push(ListUpdate::Changed {
            position,
            count,
            payload: payload.cloned(),
        });
    }
}

/// New data bundled with the updates that turn the displayed list into it.
///
/// Compute this off the UI thread, then on the UI thread swap in [`DiffResult::data`] and call
/// [`DiffResult::dispatch_updates_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffResult<D, P = ()> {
    data: D,
    updates: Vec<ListUpdate<P>>,
}

impl<D, P> DiffResult<D, P> {
    pub fn new(data: D, updates: Vec<ListUpdate<P>>) -> Self {
        Self { data, updates }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn updates(&self) -> &[ListUpdate<P>] {
        &self.updates
    }

    pub fn is_unchanged(&self) -> bool {
        self.updates.is_empty()
    }

    /// Replays every update, in order, into `callback`.
    pub fn dispatch_updates_to<C: ListUpdateCallback<P> + ?Sized>(&self, callback: &mut C) {
        ctrace!(updates = self.updates.len(), "dispatch_updates_to");
        for update in &self.updates {
            update.dispatch_to(callback);
        }
    }

    pub fn into_data(self) -> D {
        self.data
    }

    pub fn into_parts(self) -> (D, Vec<ListUpdate<P>>) {
        (self.data, self.updates)
    }
}
