//! Submission workflow of the console.
//!
//! Elm-style: `ConsoleState::update` takes an `Action`, mutates the state
//! and returns the `Command`s to run. The runtime executes each command
//! (`effects::execute` for backend calls, its own timer for
//! `DismissLater`) and feeds the resulting action back into `update`.
//!
//! Key behaviors
//! - Refreshes replace a collection wholesale; failures keep the old one.
//! - Submits validate the draft, post it, and on success notify, refresh
//!   the collection, reset the draft and close the form's dialog.
//! - The CPF lookup distinguishes found, not found (warning) and failure.
//! - Busy state is tracked per operation; closing a dialog detaches the
//!   operations it started.

pub mod effects;
pub mod messages;
pub mod pending;
mod state;
pub mod texts;
mod update;

pub use effects::{Command, execute};
pub use messages::{Action, Dialog};
pub use pending::{OpId, Operation};
pub use state::ConsoleState;
