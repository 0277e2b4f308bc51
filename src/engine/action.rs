//! Action callables run while a transition is in flight.

use crate::core::{State, Symbol};
use crate::engine::context::MachineContext;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by an action.
///
/// An action error aborts the transition before anything commits: the
/// machine keeps its pre-transition state, pushes nothing onto history,
/// and writes nothing to the journal.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    /// Create an action failure with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Type alias for transition action callables.
///
/// Actions run synchronously inside
/// [`StateMachine::process`](crate::engine::StateMachine::process) with a
/// mutable borrow of the machine context. They may inspect the in-flight
/// input, the pre-transition state, and the planned next state, and they
/// may mutate the domain payload. Moving the machine is the engine's
/// job, applied only after the action returns `Ok`.
pub type Action<S, I, D = ()> =
    Arc<dyn Fn(&mut MachineContext<S, I, D>) -> Result<(), ActionError> + Send + Sync>;

/// Wrap a closure or function as an [`Action`].
///
/// # Example
///
/// ```rust
/// use automat::{action, StateMachine};
///
/// let mut machine: StateMachine<String, String, u32> =
///     StateMachine::with_payload("stopped".to_string(), 0);
///
/// machine.register(
///     "start".to_string(),
///     "stopped".to_string(),
///     Some(action(|ctx| {
///         *ctx.data_mut() += 1;
///         Ok(())
///     })),
///     Some("started".to_string()),
/// );
///
/// machine.process("start".to_string()).unwrap();
/// assert_eq!(*machine.data(), 1);
/// ```
pub fn action<S, I, D, F>(f: F) -> Action<S, I, D>
where
    S: State,
    I: Symbol,
    D: 'static,
    F: Fn(&mut MachineContext<S, I, D>) -> Result<(), ActionError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_error_carries_message() {
        let err = ActionError::new("grid is empty");
        assert_eq!(err.message(), "grid is empty");
        assert_eq!(err.to_string(), "grid is empty");
    }

    #[test]
    fn action_wraps_a_closure() {
        let run: Action<String, String, Vec<String>> =
            action(|ctx: &mut MachineContext<String, String, Vec<String>>| {
                ctx.data_mut().push("ran".to_string());
                Ok(())
            });

        let mut ctx = MachineContext::new("stopped".to_string(), Vec::new());
        run(&mut ctx).unwrap();

        assert_eq!(ctx.data(), &["ran".to_string()]);
    }

    #[test]
    fn action_wraps_a_named_function() {
        fn fail(_ctx: &mut MachineContext<String, String>) -> Result<(), ActionError> {
            Err(ActionError::new("nope"))
        }

        let run: Action<String, String> = action(fail);
        let mut ctx = MachineContext::new("stopped".to_string(), ());

        assert_eq!(run(&mut ctx), Err(ActionError::new("nope")));
    }
}
