//! Input symbol trait for transition triggers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for input symbols fed to a state machine.
///
/// Symbols carry the same bounds as [`State`](crate::core::State): they
/// pair with the current state to key the transition table, land in the
/// transition journal, and get named in logs and error messages. The two
/// traits stay separate so a machine can use, say, enum states with raw
/// string input.
///
/// # Example
///
/// ```rust
/// use automat::core::Symbol;
///
/// let command = "collect".to_string();
/// assert_eq!(command.name(), "collect");
/// ```
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the symbol's name for display/logging.
    fn name(&self) -> &str;
}

/// Strings are the common case: interactive drivers feed user input
/// straight into the machine.
impl Symbol for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
