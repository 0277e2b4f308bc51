//! The imperative shell: transition table, machine context, and the
//! machine that drives them.
//!
//! Where [`crate::core`] is pure data, everything here mutates in
//! place - `process` resolves an input against the table, runs the
//! resolved action synchronously, and commits the move.

mod action;
mod context;
mod machine;
mod table;

pub use action::{action, Action, ActionError};
pub use context::MachineContext;
pub use machine::StateMachine;
pub use table::{
    DefaultTransition, ResolvedTransition, TransitionEntry, TransitionError, TransitionTable,
};
