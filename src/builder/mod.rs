//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for assembling
//! transition tables with minimal boilerplate while keeping type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::{TransitionBuilder, TransitionDef};

use crate::core::{State, Symbol};
use crate::engine::{ActionError, MachineContext};

/// Create a plain transition with no action.
///
/// # Example
///
/// ```
/// use automat::builder::simple_transition;
/// use automat::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Stopped,
///         Started,
///     }
/// }
///
/// let def = simple_transition::<_, _, ()>("start".to_string(), Phase::Stopped, Phase::Started);
/// assert_eq!(def.symbol, "start");
/// ```
pub fn simple_transition<S, I, D>(symbol: I, from: S, to: S) -> TransitionDef<S, I, D>
where
    S: State,
    I: Symbol,
    D: 'static,
{
    TransitionBuilder::new()
        .on(symbol)
        .from(from)
        .to(to)
        .build()
        .expect("transition with symbol and source always builds")
}

/// Create a transition that runs an action closure before committing.
///
/// # Example
///
/// ```
/// use automat::builder::action_transition;
/// use automat::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Stopped,
///         Started,
///     }
/// }
///
/// let def = action_transition::<_, _, u32, _>(
///     "start".to_string(),
///     Phase::Stopped,
///     Phase::Started,
///     |ctx| {
///         *ctx.data_mut() += 1;
///         Ok(())
///     },
/// );
/// assert!(def.action.is_some());
/// ```
pub fn action_transition<S, I, D, F>(symbol: I, from: S, to: S, f: F) -> TransitionDef<S, I, D>
where
    S: State,
    I: Symbol,
    D: 'static,
    F: Fn(&mut MachineContext<S, I, D>) -> Result<(), ActionError> + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .on(symbol)
        .from(from)
        .to(to)
        .invokes(f)
        .build()
        .expect("transition with symbol and source always builds")
}
