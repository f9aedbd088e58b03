use std::any::Any;

/// A unit of application state owned by a [`crate::StateCtx`].
///
/// States are plain values. They are read during rendering, edited in place
/// through [`crate::StateCtx::state_mut`], and replaced wholesale when an
/// update arrives through the [`crate::Updater`] channel.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same concrete type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` implementation for plain states.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_box: type mismatch for {}",
            std::any::type_name::<T>()
        ),
    }
}
