//! Previous-state history stack.
//!
//! Every committed transition pushes the pre-transition state; callers
//! walk back through it one pop at a time. The stack is a drain, not a
//! peek: each query consumes an entry.

use super::state::State;
use serde::{Deserialize, Serialize};

/// LIFO record of previously visited states.
///
/// Draining past the beginning of history is not an error. The stack
/// answers with the `fallback` state it was built with; a machine passes
/// its initial state, so an exhausted stack keeps reporting an
/// initial-like value. Entries are never evicted, so a long-running
/// machine grows its history without bound.
///
/// # Example
///
/// ```rust
/// use automat::core::HistoryStack;
///
/// let mut history = HistoryStack::new("stopped".to_string());
/// history.push("started".to_string());
/// history.push("collecting".to_string());
///
/// assert_eq!(history.pop(), "collecting");
/// assert_eq!(history.pop(), "started");
/// assert_eq!(history.pop(), "stopped"); // exhausted: fallback
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryStack<S: State> {
    states: Vec<S>,
    fallback: S,
}

impl<S: State> HistoryStack<S> {
    /// Create an empty stack that answers `fallback` once drained.
    pub fn new(fallback: S) -> Self {
        Self {
            states: Vec::new(),
            fallback,
        }
    }

    /// Push a visited state onto the stack.
    pub fn push(&mut self, state: S) {
        self.states.push(state);
    }

    /// Pop the most recently pushed state.
    ///
    /// Returns a clone of the fallback state when the stack is empty, so
    /// callers never have to handle an underflow case.
    pub fn pop(&mut self) -> S {
        self.states.pop().unwrap_or_else(|| self.fallback.clone())
    }

    /// The fallback state returned by [`pop`](Self::pop) on underflow.
    pub fn fallback(&self) -> &S {
        &self.fallback
    }

    /// Number of entries currently on the stack.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the stack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All entries in push order (oldest first).
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Discard every entry. The fallback is untouched.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}
