//! State runtime shared by the portal crates.
//!
//! The UI thread owns a [`StateCtx`] holding input [`State`]s, output
//! [`Compute`]s and registered [`Command`]s. Commands run against a
//! [`CommandSnapshot`] and report back through an [`Updater`].

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::StateError;
pub use snapshot::{CommandSnapshot, ComputeSnapshot, StateSnapshot};
pub use state::{State, state_assign_impl};
pub use task::TaskId;
pub use updater::Updater;
