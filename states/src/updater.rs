use std::any::{Any, TypeId};

use crate::State;

/// Cloneable handle that queues state replacements for the next
/// [`crate::StateCtx::sync_computes`] pass.
///
/// The handle is cheap to clone and may be moved into completion callbacks
/// running on other threads; the receiving context applies updates on the UI
/// thread only.
#[derive(Clone)]
pub struct Updater {
    tx: flume::Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(tx: flume::Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { tx }
    }

    /// Queue a full replacement of the registered state of type `T`.
    pub fn set<T: State>(&self, state: T) {
        if self.tx.send((TypeId::of::<T>(), Box::new(state))).is_err() {
            log::warn!(
                "dropping update for {}: state context is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
