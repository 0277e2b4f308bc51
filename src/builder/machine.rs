//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionDef};
use crate::core::{State, Symbol};
use crate::engine::{Action, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Only the initial state is required. A machine with no registered
/// transitions is legal - entries and the default transition can also be
/// added after construction, and a default-only table is a valid way to
/// run a catch-all machine.
///
/// `build` fills in a missing payload with `D::default()`; construct the
/// machine via [`StateMachine::with_payload`] when the payload type has
/// no `Default`.
pub struct StateMachineBuilder<S: State, I: Symbol, D: 'static = ()> {
    initial: Option<S>,
    payload: Option<D>,
    transitions: Vec<TransitionDef<S, I, D>>,
    default_transition: Option<(Option<Action<S, I, D>>, Option<S>)>,
    clear_history_on_reset: bool,
}

impl<S: State, I: Symbol, D: 'static> StateMachineBuilder<S, I, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            payload: None,
            transitions: Vec::new(),
            default_transition: None,
            clear_history_on_reset: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the domain payload (optional, defaults to `D::default()`).
    pub fn payload(mut self, data: D) -> Self {
        self.payload = Some(data);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, I, D>) -> Result<Self, BuildError> {
        let def = builder.build()?;
        self.transitions.push(def);
        Ok(self)
    }

    /// Add a pre-built transition definition.
    pub fn add_transition(mut self, def: TransitionDef<S, I, D>) -> Self {
        self.transitions.push(def);
        self
    }

    /// Add multiple transition definitions at once.
    pub fn transitions(mut self, defs: Vec<TransitionDef<S, I, D>>) -> Self {
        self.transitions.extend(defs);
        self
    }

    /// Install a default transition for unmatched `(symbol, state)` pairs.
    /// `next: None` resolves to the initial state at process time.
    pub fn default_transition(mut self, action: Option<Action<S, I, D>>, next: Option<S>) -> Self {
        self.default_transition = Some((action, next));
        self
    }

    /// Make `reset` also discard the history stack (off by default).
    pub fn clear_history_on_reset(mut self, clear: bool) -> Self {
        self.clear_history_on_reset = clear;
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, I, D>, BuildError>
    where
        D: Default,
    {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let data = self.payload.unwrap_or_default();

        let mut machine = StateMachine::with_payload(initial, data);
        for def in self.transitions {
            machine.register(def.symbol, def.state, def.action, def.next);
        }
        if let Some((action, next)) = self.default_transition {
            machine.set_default(action, next);
        }
        machine.set_clear_history_on_reset(self.clear_history_on_reset);

        Ok(machine)
    }
}

impl<S: State, I: Symbol, D: 'static> Default for StateMachineBuilder<S, I, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::action;

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<String, String>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn machine_without_transitions_is_legal() {
        let machine = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), "stopped");
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .transition(
                TransitionBuilder::new()
                    .on("start".to_string())
                    .from("stopped".to_string())
                    .to("started".to_string()),
            )
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .on("stop".to_string())
                    .from("started".to_string())
                    .to("stopped".to_string()),
            )
            .unwrap()
            .build()
            .unwrap();

        machine.process("start".to_string()).unwrap();
        assert_eq!(machine.current_state(), "started");
    }

    #[test]
    fn invalid_transition_surfaces_build_error() {
        let result = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .transition(TransitionBuilder::new().on("start".to_string()));

        assert!(matches!(result, Err(BuildError::MissingSourceState)));
    }

    #[test]
    fn payload_is_threaded_through() {
        let machine = StateMachineBuilder::<String, String, Vec<u32>>::new()
            .initial("stopped".to_string())
            .payload(vec![1, 2, 3])
            .build()
            .unwrap();

        assert_eq!(machine.data(), &[1, 2, 3]);
    }

    #[test]
    fn missing_payload_falls_back_to_default() {
        let machine = StateMachineBuilder::<String, String, Vec<u32>>::new()
            .initial("stopped".to_string())
            .build()
            .unwrap();

        assert!(machine.data().is_empty());
    }

    #[test]
    fn default_transition_is_installed() {
        let mut machine = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .default_transition(None, Some("error".to_string()))
            .build()
            .unwrap();

        machine.process("anything".to_string()).unwrap();
        assert_eq!(machine.current_state(), "error");
    }

    #[test]
    fn default_transition_action_runs() {
        let mut machine = StateMachineBuilder::<String, String, u32>::new()
            .initial("stopped".to_string())
            .default_transition(
                Some(action(|ctx| {
                    *ctx.data_mut() += 1;
                    Ok(())
                })),
                None,
            )
            .build()
            .unwrap();

        machine.process("bogus".to_string()).unwrap();
        assert_eq!(*machine.data(), 1);
        assert_eq!(machine.current_state(), "stopped");
    }

    #[test]
    fn clear_history_on_reset_is_wired() {
        let mut machine = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .add_transition(
                TransitionBuilder::new()
                    .on("start".to_string())
                    .from("stopped".to_string())
                    .to("started".to_string())
                    .build()
                    .unwrap(),
            )
            .clear_history_on_reset(true)
            .build()
            .unwrap();

        machine.process("start".to_string()).unwrap();
        machine.reset();

        assert!(machine.history().is_empty());
    }

    #[test]
    fn bulk_transitions_register_in_order() {
        let defs = vec![
            TransitionBuilder::new()
                .on("start".to_string())
                .from("stopped".to_string())
                .to("started".to_string())
                .build()
                .unwrap(),
            // same key again: the later entry wins
            TransitionBuilder::new()
                .on("start".to_string())
                .from("stopped".to_string())
                .to("collecting".to_string())
                .build()
                .unwrap(),
        ];

        let mut machine = StateMachineBuilder::<String, String>::new()
            .initial("stopped".to_string())
            .transitions(defs)
            .build()
            .unwrap();

        machine.process("start".to_string()).unwrap();
        assert_eq!(machine.current_state(), "collecting");
    }
}
