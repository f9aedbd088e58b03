use crate::{Dep, Updater};

/// A manually dispatched state transition.
///
/// Commands are constructed via `Default` and run synchronously on the UI
/// thread with read access to the registered states. Results flow back
/// through the [`Updater`]; long-running work (HTTP calls) hands the updater
/// to its completion callback instead of blocking.
///
/// Dispatch explicitly via `ctx.dispatch::<SomeCommand>()`.
pub trait Command: Default {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
