//! Typemap-based state container for the RR Estates client.
//!
//! Widgets read states and compute caches each frame; transitions happen
//! either in place through [`StateCtx::state_mut`] or by queueing a
//! replacement through an [`Updater`], which the shell applies at the start
//! of the next frame. Commands model explicit user actions.

mod basic_states;
mod command;
mod compute;
mod ctx;
mod dep;
mod state;
mod state_sync_status;
mod updater;

pub use basic_states::Clock;
pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
