//! Transition table: registration, fallback, and lookup.

use crate::core::{State, Symbol};
use crate::engine::action::{Action, ActionError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced while driving a machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    /// No exact entry and no default transition matched the input.
    #[error("transition is undefined: ('{symbol}', '{state}')")]
    Undefined { symbol: String, state: String },

    /// The transition's action failed; nothing was committed.
    #[error("transition action failed: {0}")]
    ActionFailed(#[from] ActionError),
}

/// A registered transition: the optional action to run and the state the
/// machine commits to afterwards.
pub struct TransitionEntry<S: State, I: Symbol, D: 'static = ()> {
    pub action: Option<Action<S, I, D>>,
    pub next: S,
}

impl<S: State, I: Symbol, D: 'static> Clone for TransitionEntry<S, I, D> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            next: self.next.clone(),
        }
    }
}

/// The fallback entry consulted when no exact key matches.
///
/// `next: None` is meaningful here: the machine resolves it to its
/// initial state at process time, not to the state it happens to be in.
pub struct DefaultTransition<S: State, I: Symbol, D: 'static = ()> {
    pub action: Option<Action<S, I, D>>,
    pub next: Option<S>,
}

impl<S: State, I: Symbol, D: 'static> Clone for DefaultTransition<S, I, D> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            next: self.next.clone(),
        }
    }
}

/// Borrowed view of a successful lookup.
///
/// `next: None` only arises from a default transition registered without
/// an explicit target; the machine substitutes its initial state.
pub struct ResolvedTransition<'a, S: State, I: Symbol, D: 'static = ()> {
    pub action: Option<&'a Action<S, I, D>>,
    pub next: Option<&'a S>,
}

impl<S: State, I: Symbol, D: 'static> std::fmt::Debug for ResolvedTransition<'_, S, I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedTransition")
            .field("action", &self.action.map(|_| "<action>"))
            .field("next", &self.next)
            .finish()
    }
}

/// Lookup table keyed by `(input symbol, current state)`.
///
/// Registration is last-write-wins: re-registering a pair silently
/// replaces the earlier entry. Lookup resolution order is fixed - the
/// exact pair first, the default transition second, and
/// [`TransitionError::Undefined`] when neither exists. There is no
/// partial matching on only the symbol or only the state.
pub struct TransitionTable<S: State, I: Symbol, D: 'static = ()> {
    entries: HashMap<(I, S), TransitionEntry<S, I, D>>,
    fallback: Option<DefaultTransition<S, I, D>>,
}

impl<S: State, I: Symbol, D: 'static> Default for TransitionTable<S, I, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Symbol, D: 'static> TransitionTable<S, I, D> {
    /// Create an empty table with no default transition.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: None,
        }
    }

    /// Insert or overwrite the entry for `(symbol, state)`.
    ///
    /// Omitting `next` registers a self-loop: the machine stays in
    /// `state` when the transition fires.
    pub fn register(&mut self, symbol: I, state: S, action: Option<Action<S, I, D>>, next: Option<S>) {
        let next = next.unwrap_or_else(|| state.clone());
        tracing::trace!(
            symbol = symbol.name(),
            state = state.name(),
            next = next.name(),
            "transition registered"
        );
        self.entries.insert((symbol, state), TransitionEntry { action, next });
    }

    /// Install the fallback consulted when no exact pair matches.
    ///
    /// With `next: None` the fallback sends the machine back to its
    /// initial state; pass an explicit state to go somewhere else.
    /// Installing a new fallback replaces the previous one.
    pub fn set_default(&mut self, action: Option<Action<S, I, D>>, next: Option<S>) {
        self.fallback = Some(DefaultTransition { action, next });
    }

    /// Remove the fallback; unmatched lookups fail afterwards.
    pub fn clear_default(&mut self) {
        self.fallback = None;
    }

    /// Whether a default transition is installed.
    pub fn has_default(&self) -> bool {
        self.fallback.is_some()
    }

    /// Number of exact entries (the default transition is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no exact entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `(symbol, state)` to a transition.
    pub fn lookup(
        &self,
        symbol: &I,
        state: &S,
    ) -> Result<ResolvedTransition<'_, S, I, D>, TransitionError> {
        if let Some(entry) = self.entries.get(&(symbol.clone(), state.clone())) {
            return Ok(ResolvedTransition {
                action: entry.action.as_ref(),
                next: Some(&entry.next),
            });
        }

        if let Some(fallback) = &self.fallback {
            return Ok(ResolvedTransition {
                action: fallback.action.as_ref(),
                next: fallback.next.as_ref(),
            });
        }

        Err(TransitionError::Undefined {
            symbol: symbol.name().to_string(),
            state: state.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::action::action;

    fn table() -> TransitionTable<String, String> {
        TransitionTable::new()
    }

    fn key(symbol: &str, state: &str) -> (String, String) {
        (symbol.to_string(), state.to_string())
    }

    #[test]
    fn register_then_lookup_finds_entry() {
        let mut table = table();
        table.register(
            "start".to_string(),
            "stopped".to_string(),
            None,
            Some("started".to_string()),
        );

        let (symbol, state) = key("start", "stopped");
        let resolved = table.lookup(&symbol, &state).unwrap();

        assert_eq!(resolved.next.map(String::as_str), Some("started"));
        assert!(resolved.action.is_none());
    }

    #[test]
    fn later_registration_overwrites_earlier() {
        let mut table = table();
        table.register(
            "start".to_string(),
            "stopped".to_string(),
            None,
            Some("started".to_string()),
        );
        table.register(
            "start".to_string(),
            "stopped".to_string(),
            None,
            Some("collecting".to_string()),
        );

        assert_eq!(table.len(), 1);

        let (symbol, state) = key("start", "stopped");
        let resolved = table.lookup(&symbol, &state).unwrap();
        assert_eq!(resolved.next.map(String::as_str), Some("collecting"));
    }

    #[test]
    fn omitted_next_registers_self_loop() {
        let mut table = table();
        table.register("tick".to_string(), "running".to_string(), None, None);

        let (symbol, state) = key("tick", "running");
        let resolved = table.lookup(&symbol, &state).unwrap();
        assert_eq!(resolved.next.map(String::as_str), Some("running"));
    }

    #[test]
    fn lookup_prefers_exact_entry_over_default() {
        let mut table = table();
        table.register(
            "start".to_string(),
            "stopped".to_string(),
            None,
            Some("started".to_string()),
        );
        table.set_default(None, Some("error".to_string()));

        let (symbol, state) = key("start", "stopped");
        let resolved = table.lookup(&symbol, &state).unwrap();
        assert_eq!(resolved.next.map(String::as_str), Some("started"));
    }

    #[test]
    fn default_catches_unmatched_pairs() {
        let mut table = table();
        table.set_default(Some(action(|_| Ok(()))), Some("error".to_string()));

        let (symbol, state) = key("bogus", "anywhere");
        let resolved = table.lookup(&symbol, &state).unwrap();

        assert_eq!(resolved.next.map(String::as_str), Some("error"));
        assert!(resolved.action.is_some());
    }

    #[test]
    fn default_without_next_resolves_to_none() {
        let mut table = table();
        table.set_default(None, None);

        let (symbol, state) = key("bogus", "anywhere");
        let resolved = table.lookup(&symbol, &state).unwrap();

        // the machine substitutes its initial state for None
        assert!(resolved.next.is_none());
    }

    #[test]
    fn lookup_without_entry_or_default_is_undefined() {
        let table = table();

        let (symbol, state) = key("bogus", "stopped");
        let err = table.lookup(&symbol, &state).unwrap_err();

        assert_eq!(
            err,
            TransitionError::Undefined {
                symbol: "bogus".to_string(),
                state: "stopped".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "transition is undefined: ('bogus', 'stopped')"
        );
    }

    #[test]
    fn clear_default_restores_undefined_errors() {
        let mut table = table();
        table.set_default(None, None);
        assert!(table.has_default());

        table.clear_default();
        assert!(!table.has_default());

        let (symbol, state) = key("bogus", "stopped");
        assert!(table.lookup(&symbol, &state).is_err());
    }

    #[test]
    fn partial_key_matches_do_not_resolve() {
        let mut table = table();
        table.register(
            "start".to_string(),
            "stopped".to_string(),
            None,
            Some("started".to_string()),
        );

        // right symbol, wrong state
        let (symbol, state) = key("start", "started");
        assert!(table.lookup(&symbol, &state).is_err());

        // right state, wrong symbol
        let (symbol, state) = key("stop", "stopped");
        assert!(table.lookup(&symbol, &state).is_err());
    }
}
