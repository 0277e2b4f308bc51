//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Input symbol not specified. Call .on(symbol)")]
    MissingInputSymbol,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingSourceState,
}
