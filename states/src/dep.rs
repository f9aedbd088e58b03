use std::any::TypeId;
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view over registered states and computes, handed to commands and
/// computes while they run.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// Borrow a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered; registration happens
    /// once at startup, so a miss is a programming error.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    /// Borrow a registered compute's cached value, if present.
    pub fn get_compute_ref<T: Compute>(&self) -> Option<&'a T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }
}
