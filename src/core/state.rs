//! Core `State` trait for state machine states.
//!
//! States are opaque tokens: the engine never looks inside them, it only
//! compares them, hashes them into the transition table, and asks for a
//! name when logging or reporting errors.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is an opaque, comparable identifier. Equality and hashing are
/// the only operations the engine relies on; `name` exists for
/// diagnostics and log output.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states key the transition table and are
///   copied into the history stack
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so history
///   and journal snapshots can be exported
/// - `Send` + `Sync` + `'static`: a machine may be moved into another
///   thread (access to one machine still needs external serialization)
///
/// `String` implements this trait out of the box; closed state sets are
/// best written as enums via the [`state_enum!`](crate::state_enum)
/// macro.
///
/// # Example
///
/// ```rust
/// use automat::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Stopped,
///     Started,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Stopped => "Stopped",
///             Self::Started => "Started",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Stopped.name(), "Stopped");
/// assert_ne!(Phase::Stopped, Phase::Started);
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Plain strings work as states, so open-ended state sets can be read
/// from configuration or built at runtime.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
