//! Mutable machine context handed to actions.

use crate::core::{HistoryStack, State, Symbol};
use crate::engine::action::Action;

/// The machine's mutable core: current state, history, in-flight
/// transition fields, and the caller's domain payload.
///
/// Actions receive `&mut MachineContext` while a transition is in
/// flight. From an action's point of view the state and history are
/// read-only - the engine commits the state change itself after the
/// action returns - while the payload is the action's to mutate.
///
/// The in-flight fields (`input`, `next_state`, `pending_action`) are
/// populated only between transition resolution and commit. Outside a
/// `process` call they read as `None`; a failed transition clears them
/// too, so stale values never leak into the next call.
pub struct MachineContext<S: State, I: Symbol, D: 'static = ()> {
    current: S,
    input: Option<I>,
    action: Option<Action<S, I, D>>,
    next: Option<S>,
    history: HistoryStack<S>,
    data: D,
}

impl<S: State, I: Symbol, D: 'static> MachineContext<S, I, D> {
    pub(crate) fn new(initial: S, data: D) -> Self {
        let history = HistoryStack::new(initial.clone());
        Self {
            current: initial,
            input: None,
            action: None,
            next: None,
            history,
            data,
        }
    }

    /// The current state; for an in-flight action, the pre-transition state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The input symbol being processed, while a transition is in flight.
    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    /// The state the machine will commit to, while a transition is in flight.
    pub fn next_state(&self) -> Option<&S> {
        self.next.as_ref()
    }

    /// The action selected for the in-flight transition, if any.
    pub fn pending_action(&self) -> Option<&Action<S, I, D>> {
        self.action.as_ref()
    }

    /// The visited-state history (read-only).
    pub fn history(&self) -> &HistoryStack<S> {
        &self.history
    }

    /// The caller-supplied domain payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the domain payload - the one part of the
    /// machine an action is allowed to change.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Stage the in-flight fields for one resolved transition.
    pub(crate) fn begin(&mut self, input: I, action: Option<Action<S, I, D>>, next: S) {
        self.input = Some(input);
        self.action = action;
        self.next = Some(next);
    }

    /// Drop the in-flight fields without touching state or history.
    pub(crate) fn clear_transient(&mut self) {
        self.input = None;
        self.action = None;
        self.next = None;
    }

    /// Commit the transition: push the pre-transition state onto history,
    /// move to `next`, clear the in-flight fields. Returns the state the
    /// machine left.
    pub(crate) fn advance(&mut self, next: S) -> S {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous.clone());
        self.clear_transient();
        previous
    }

    /// Pop the most recently visited state off the history stack.
    pub(crate) fn pop_history(&mut self) -> S {
        self.history.pop()
    }

    /// Force the current state, clearing any in-flight fields. Used by
    /// reset; bypasses history on purpose.
    pub(crate) fn restore(&mut self, state: S) {
        self.current = state;
        self.clear_transient();
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }
}
