//! Builder for constructing table transitions.

use crate::builder::error::BuildError;
use crate::core::{State, Symbol};
use crate::engine::{Action, ActionError, MachineContext};
use std::sync::Arc;

/// A transition ready for registration: the `(symbol, state)` table key,
/// an optional action, and an optional explicit target state. A missing
/// target means a self-loop.
pub struct TransitionDef<S: State, I: Symbol, D: 'static = ()> {
    pub symbol: I,
    pub state: S,
    pub action: Option<Action<S, I, D>>,
    pub next: Option<S>,
}

impl<S: State, I: Symbol, D: 'static> Clone for TransitionDef<S, I, D> {
    fn clone(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            state: self.state.clone(),
            action: self.action.clone(),
            next: self.next.clone(),
        }
    }
}

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, I: Symbol, D: 'static = ()> {
    symbol: Option<I>,
    state: Option<S>,
    action: Option<Action<S, I, D>>,
    next: Option<S>,
}

impl<S: State, I: Symbol, D: 'static> TransitionBuilder<S, I, D> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            symbol: None,
            state: None,
            action: None,
            next: None,
        }
    }

    /// Set the input symbol that triggers the transition (required).
    pub fn on(mut self, symbol: I) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the target state (optional).
    /// Omitting it registers a self-loop on the source state.
    pub fn to(mut self, state: S) -> Self {
        self.next = Some(state);
        self
    }

    /// Attach a pre-built action (optional).
    pub fn action(mut self, action: Action<S, I, D>) -> Self {
        self.action = Some(action);
        self
    }

    /// Attach an action from a closure (optional).
    pub fn invokes<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut MachineContext<S, I, D>) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(f));
        self
    }

    /// Build the transition definition.
    pub fn build(self) -> Result<TransitionDef<S, I, D>, BuildError> {
        let symbol = self.symbol.ok_or(BuildError::MissingInputSymbol)?;
        let state = self.state.ok_or(BuildError::MissingSourceState)?;

        Ok(TransitionDef {
            symbol,
            state,
            action: self.action,
            next: self.next,
        })
    }
}

impl<S: State, I: Symbol, D: 'static> Default for TransitionBuilder<S, I, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_missing_symbol() {
        let result = TransitionBuilder::<String, String>::new()
            .from("stopped".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::MissingInputSymbol)));
    }

    #[test]
    fn builder_validates_missing_source_state() {
        let result = TransitionBuilder::<String, String>::new()
            .on("start".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::MissingSourceState)));
    }

    #[test]
    fn fluent_api_builds_definition() {
        let def: TransitionDef<String, String> = TransitionBuilder::new()
            .on("start".to_string())
            .from("stopped".to_string())
            .to("started".to_string())
            .build()
            .unwrap();

        assert_eq!(def.symbol, "start");
        assert_eq!(def.state, "stopped");
        assert_eq!(def.next.as_deref(), Some("started"));
        assert!(def.action.is_none());
    }

    #[test]
    fn omitted_target_is_a_self_loop() {
        let def: TransitionDef<String, String> = TransitionBuilder::new()
            .on("tick".to_string())
            .from("running".to_string())
            .build()
            .unwrap();

        assert!(def.next.is_none());
    }

    #[test]
    fn invokes_attaches_an_action() {
        let def: TransitionDef<String, String, u32> = TransitionBuilder::new()
            .on("start".to_string())
            .from("stopped".to_string())
            .to("started".to_string())
            .invokes(|ctx: &mut MachineContext<String, String, u32>| {
                *ctx.data_mut() += 1;
                Ok(())
            })
            .build()
            .unwrap();

        assert!(def.action.is_some());
    }
}
