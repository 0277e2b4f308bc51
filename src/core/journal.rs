//! Transition journal: an append-only audit trail.
//!
//! Where the history stack answers "where was I just now" and shrinks as
//! it is queried, the journal keeps the full story of every committed
//! transition, including which input symbol triggered it and when.

use super::state::State;
use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// Records are immutable values: a move from one state to another,
/// triggered by an input symbol, at a specific point in time.
///
/// # Example
///
/// ```rust
/// use automat::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "stopped".to_string(),
///     input: "start".to_string(),
///     to: "started".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(record.input, "start");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, I: Symbol> {
    /// The state being transitioned from
    pub from: S,
    /// The input symbol that triggered the transition
    pub input: I,
    /// The state being transitioned to
    pub to: S,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of committed transitions.
///
/// The journal is immutable - `record` returns a new journal with the
/// entry appended, leaving the original untouched. Failed transitions
/// never reach it: an entry means the machine really moved.
///
/// # Example
///
/// ```rust
/// use automat::core::{TransitionJournal, TransitionRecord};
/// use chrono::Utc;
///
/// let journal = TransitionJournal::new();
///
/// let journal = journal.record(TransitionRecord {
///     from: "stopped".to_string(),
///     input: "start".to_string(),
///     to: "started".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let journal = journal.record(TransitionRecord {
///     from: "started".to_string(),
///     input: "collect".to_string(),
///     to: "collecting".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = journal.path();
/// assert_eq!(path.len(), 3); // stopped -> started -> collecting
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionJournal<S: State, I: Symbol> {
    records: Vec<TransitionRecord<S, I>>,
}

impl<S: State, I: Symbol> Default for TransitionJournal<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Symbol> TransitionJournal<S, I> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new journal.
    ///
    /// This is a pure function - it does not mutate the existing journal
    /// but returns a new one with the record appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automat::core::{TransitionJournal, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let journal = TransitionJournal::new();
    /// let updated = journal.record(TransitionRecord {
    ///     from: "stopped".to_string(),
    ///     input: "start".to_string(),
    ///     to: "started".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(journal.records().len(), 0); // original unchanged
    /// assert_eq!(updated.records().len(), 1);
    /// ```
    pub fn record(&self, record: TransitionRecord<S, I>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state, then
    /// the `to` state of each record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` when the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in commit order.
    pub fn records(&self) -> &[TransitionRecord<S, I>] {
        &self.records
    }

    /// Number of committed transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
