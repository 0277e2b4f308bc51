//! Core state machine types.
//!
//! This module contains the pure data side of the machine:
//! - Token traits `State` and `Symbol`
//! - The drainable previous-state `HistoryStack`
//! - The append-only `TransitionJournal`
//!
//! Nothing here runs actions or performs I/O; the imperative shell
//! lives in [`crate::engine`].

mod history;
mod journal;
mod state;
mod symbol;

pub use history::HistoryStack;
pub use journal::{TransitionJournal, TransitionRecord};
pub use state::State;
pub use symbol::Symbol;
