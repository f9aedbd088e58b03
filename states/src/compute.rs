use std::any::{Any, TypeId};

use crate::{Dep, State, Updater};

/// Dependencies of a compute: state type ids first, compute type ids second.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A cached value derived from other states.
///
/// `compute` runs with read access to the registered states and must publish
/// its result through the [`Updater`] rather than mutating in place; the new
/// value is applied on the next [`crate::StateCtx::sync_computes`] pass. A
/// compute whose value is driven purely by commands implements `compute` as a
/// no-op.
pub trait Compute: State {
    /// States and computes this compute reads. A change to any of them marks
    /// the compute dirty.
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}

/// Shared `assign_box` implementation for computes.
pub fn assign_impl<T: Compute>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_box: type mismatch for {}",
            std::any::type_name::<T>()
        ),
    }
}
