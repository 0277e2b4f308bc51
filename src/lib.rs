//! Automat: a table-driven finite state machine engine
//!
//! Transitions live in a lookup table keyed by `(input symbol, current
//! state)`. Feeding the machine a symbol resolves that pair - exact
//! entry first, then an optional default transition - runs the entry's
//! action, and commits the move. Unmatched pairs and failing actions
//! are fully transactional: the machine keeps its state, history, and
//! journal untouched.
//!
//! # Core Concepts
//!
//! - **State** / **Symbol**: opaque comparable tokens; `String` works
//!   out of the box, closed sets come from `state_enum!`/`symbol_enum!`
//! - **TransitionTable**: `(symbol, state)` entries plus a default
//!   transition whose omitted target means "back to the initial state"
//! - **HistoryStack**: drainable record of visited states; querying the
//!   previous state consumes it
//! - **TransitionJournal**: append-only audit trail of committed moves
//! - **Actions**: synchronous closures run mid-transition that may
//!   mutate the machine's domain payload
//!
//! # Example
//!
//! ```rust
//! use automat::{action, MachineContext, StateMachine};
//!
//! let mut machine: StateMachine<String, String, Vec<String>> =
//!     StateMachine::with_payload("stopped".to_string(), Vec::new());
//!
//! machine.register(
//!     "start".to_string(),
//!     "stopped".to_string(),
//!     Some(action(
//!         |ctx: &mut MachineContext<String, String, Vec<String>>| {
//!             ctx.data_mut().push("session opened".to_string());
//!             Ok(())
//!         },
//!     )),
//!     Some("started".to_string()),
//! );
//! machine.set_default(None, None); // unmatched input returns to "stopped"
//!
//! machine.process("start".to_string()).unwrap();
//! assert_eq!(machine.current_state(), "started");
//!
//! machine.process("bogus".to_string()).unwrap();
//! assert_eq!(machine.current_state(), "stopped");
//!
//! assert_eq!(machine.previous_state(), "started");
//! assert_eq!(machine.data().len(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder, TransitionDef};
pub use crate::core::{HistoryStack, State, Symbol, TransitionJournal, TransitionRecord};
pub use crate::engine::{
    action, Action, ActionError, MachineContext, StateMachine, TransitionError, TransitionTable,
};
