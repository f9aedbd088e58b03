use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Command, Compute, Dep, State, StateSyncStatus, Updater};

/// Container for every registered state and compute.
///
/// The context lives on the UI thread. Each frame the application shell
/// pushes a fresh [`crate::Clock`], drains queued updates with
/// [`Self::sync_computes`], renders, and finishes with [`Self::run_all_dirty`]
/// so computes whose inputs changed can refresh their caches.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    status: BTreeMap<TypeId, StateSyncStatus>,
    tx: flume::Sender<(TypeId, Box<dyn Any + Send>)>,
    rx: flume::Receiver<(TypeId, Box<dyn Any + Send>)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            status: BTreeMap::new(),
            tx,
            rx,
        }
    }

    /// Register a plain state. Replaces any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Register a compute. It runs on the next [`Self::run_all_dirty`] pass.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.status.insert(id, StateSyncStatus::BeforeInit);
        self.computes.insert(id, Box::new(compute));
    }

    /// Borrow a registered state.
    pub fn state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Mutably borrow a registered state, for in-place edits from widgets.
    ///
    /// # Panics
    /// Panics if the state type was never registered; registration happens
    /// once at startup, so a miss is a programming error.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    /// Borrow a compute's cached value, if registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }

    /// A handle for queueing state replacements from anywhere.
    pub fn updater(&self) -> Updater {
        Updater::new(self.tx.clone())
    }

    /// Run a command synchronously with read access to the current states.
    pub fn dispatch<C: Command>(&self) {
        let command = C::default();
        let dep = Dep::new(&self.states, &self.computes);
        command.run(dep, Updater::new(self.tx.clone()));
    }

    /// Drain queued updates and apply them, marking dependent computes dirty.
    pub fn sync_computes(&mut self) {
        while let Ok((id, boxed)) = self.rx.try_recv() {
            if self.computes.contains_key(&id) {
                if let Some(compute) = self.computes.get_mut(&id) {
                    compute.assign_box(boxed);
                }
                self.status.insert(id, StateSyncStatus::Clean);
                self.mark_dependents_dirty(id);
            } else if self.states.contains_key(&id) {
                if let Some(state) = self.states.get_mut(&id) {
                    state.assign_box(boxed);
                }
                self.mark_dependents_dirty(id);
            } else {
                log::warn!("dropping update for unregistered type {id:?}");
            }
        }
    }

    /// Run every compute whose inputs changed since it last ran.
    pub fn run_all_dirty(&mut self) {
        let dirty: Vec<TypeId> = self
            .status
            .iter()
            .filter(|(_, s)| {
                matches!(s, StateSyncStatus::BeforeInit | StateSyncStatus::Dirty)
            })
            .map(|(id, _)| *id)
            .collect();
        for id in dirty {
            // Remove the compute while it runs so `Dep` can safely borrow the
            // rest of the container.
            let Some(compute) = self.computes.remove(&id) else {
                continue;
            };
            {
                let dep = Dep::new(&self.states, &self.computes);
                compute.compute(dep, Updater::new(self.tx.clone()));
            }
            self.computes.insert(id, compute);
            self.status.insert(id, StateSyncStatus::Pending);
        }
    }

    fn mark_dependents_dirty(&mut self, changed: TypeId) {
        for (id, compute) in &self.computes {
            if *id == changed {
                continue;
            }
            let (state_deps, compute_deps) = compute.deps();
            if state_deps.contains(&changed) || compute_deps.contains(&changed) {
                self.status.insert(*id, StateSyncStatus::Dirty);
            }
        }
    }
}
