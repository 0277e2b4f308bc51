//! State machine that drives table-resolved transitions.

use crate::core::{HistoryStack, State, Symbol, TransitionJournal, TransitionRecord};
use crate::engine::action::Action;
use crate::engine::context::MachineContext;
use crate::engine::table::{TransitionError, TransitionTable};
use chrono::Utc;

/// Table-driven state machine.
///
/// The machine holds a current state and a transition table keyed by
/// `(input symbol, current state)`. Feeding it a symbol resolves the
/// pair against the table (exact entry, then default transition), runs
/// the entry's action, and only then commits: the old state is pushed
/// onto history, the new state becomes current, and the move is written
/// to the journal. A failed resolution or a failed action changes
/// nothing.
///
/// # Example
///
/// ```rust
/// use automat::StateMachine;
///
/// let mut machine: StateMachine<String, String> = StateMachine::new("stopped".to_string());
/// machine.register(
///     "start".to_string(),
///     "stopped".to_string(),
///     None,
///     Some("started".to_string()),
/// );
///
/// machine.process("start".to_string()).unwrap();
///
/// assert_eq!(machine.current_state(), "started");
/// assert_eq!(machine.previous_state(), "stopped");
/// ```
pub struct StateMachine<S: State, I: Symbol, D: 'static = ()> {
    initial: S,
    table: TransitionTable<S, I, D>,
    ctx: MachineContext<S, I, D>,
    journal: TransitionJournal<S, I>,
    clear_history_on_reset: bool,
}

impl<S: State, I: Symbol> StateMachine<S, I> {
    /// Create a machine with a unit payload.
    pub fn new(initial: S) -> Self {
        Self::with_payload(initial, ())
    }
}

impl<S: State, I: Symbol, D: 'static> StateMachine<S, I, D> {
    /// Create a machine carrying a caller-supplied domain payload.
    ///
    /// The payload is the mutable scratch space actions work against;
    /// the engine itself never touches it.
    pub fn with_payload(initial: S, data: D) -> Self {
        Self {
            initial: initial.clone(),
            table: TransitionTable::new(),
            ctx: MachineContext::new(initial, data),
            journal: TransitionJournal::new(),
            clear_history_on_reset: false,
        }
    }

    /// Register a transition for `(symbol, state)`.
    ///
    /// Omitting `next` registers a self-loop; re-registering a pair
    /// replaces the earlier entry.
    pub fn register(&mut self, symbol: I, state: S, action: Option<Action<S, I, D>>, next: Option<S>) {
        self.table.register(symbol, state, action, next);
    }

    /// Install the default transition for unmatched pairs.
    ///
    /// `next: None` resolves to the machine's initial state at process
    /// time - not to whatever state the machine is in when it fires.
    pub fn set_default(&mut self, action: Option<Action<S, I, D>>, next: Option<S>) {
        self.table.set_default(action, next);
    }

    /// Remove the default transition.
    pub fn clear_default(&mut self) {
        self.table.clear_default();
    }

    /// Whether retiring to an initial state on reset also discards the
    /// history stack. Off by default: a plain reset keeps history.
    pub fn set_clear_history_on_reset(&mut self, clear: bool) {
        self.clear_history_on_reset = clear;
    }

    /// Feed one input symbol to the machine.
    ///
    /// On success the machine has moved: the pre-transition state is on
    /// the history stack and the move is in the journal. On error
    /// nothing observable changed - an undefined pair or a failed
    /// action is fully transactional.
    pub fn process(&mut self, symbol: I) -> Result<(), TransitionError> {
        let resolved = self.table.lookup(&symbol, self.ctx.current_state())?;
        let action = resolved.action.cloned();
        let next = match resolved.next {
            Some(next) => next.clone(),
            None => self.initial.clone(),
        };

        self.ctx.begin(symbol.clone(), action.clone(), next.clone());

        if let Some(run) = action {
            if let Err(source) = run(&mut self.ctx) {
                self.ctx.clear_transient();
                return Err(TransitionError::ActionFailed(source));
            }
        }

        let previous = self.ctx.advance(next.clone());
        tracing::debug!(
            from = previous.name(),
            input = symbol.name(),
            to = next.name(),
            "transition committed"
        );
        self.journal = self.journal.record(TransitionRecord {
            from: previous,
            input: symbol,
            to: next,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Get the current state.
    pub fn current_state(&self) -> &S {
        self.ctx.current_state()
    }

    /// Pop and return the most recently visited state.
    ///
    /// This is a draining read: each call consumes one history entry,
    /// so two consecutive calls answer with two different states. Once
    /// history is exhausted the machine keeps answering with its
    /// initial state.
    pub fn previous_state(&mut self) -> S {
        self.ctx.pop_history()
    }

    /// Return the machine to its construction-time initial state.
    ///
    /// In-flight fields are cleared and no history entry is pushed; the
    /// jump back is deliberately invisible to `previous_state`. History
    /// survives a reset unless
    /// [`set_clear_history_on_reset`](Self::set_clear_history_on_reset)
    /// says otherwise. The journal always survives.
    pub fn reset(&mut self) {
        self.ctx.restore(self.initial.clone());
        if self.clear_history_on_reset {
            self.ctx.clear_history();
        }
        tracing::debug!(state = self.initial.name(), "machine reset");
    }

    /// The state the machine started in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Read access to the machine context, including in-flight fields.
    pub fn context(&self) -> &MachineContext<S, I, D> {
        &self.ctx
    }

    /// The visited-state history stack.
    pub fn history(&self) -> &HistoryStack<S> {
        self.ctx.history()
    }

    /// The append-only journal of committed transitions.
    pub fn journal(&self) -> &TransitionJournal<S, I> {
        &self.journal
    }

    /// The caller-supplied domain payload.
    pub fn data(&self) -> &D {
        self.ctx.data()
    }

    /// Mutable access to the domain payload.
    pub fn data_mut(&mut self) -> &mut D {
        self.ctx.data_mut()
    }
}
