use std::fmt;

use thiserror::Error;

/// The command call that was running when a [`CommandFailure`] happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Execute,
    Undo,
    Redo,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Execute => f.write_str("execute"),
            Phase::Undo => f.write_str("undo"),
            Phase::Redo => f.write_str("redo"),
        }
    }
}

/// A command's `execute`, `undo` or `redo` returned an error.
///
/// By the time a caller sees this the engine has already put the command back
/// where it was, so the stacks look exactly as they did before the call.
#[derive(Debug, Error)]
#[error("{phase} of `{description}` failed")]
pub struct CommandFailure<E>
where
    E: std::error::Error + 'static,
{
    phase: Phase,
    description: String,
    #[source]
    source: E,
}

impl<E> CommandFailure<E>
where
    E: std::error::Error + 'static,
{
    pub(crate) fn new(phase: Phase, description: impl Into<String>, source: E) -> Self {
        Self {
            phase,
            description: description.into(),
            source,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Description of the failed command, captured when it failed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn cause(&self) -> &E {
        &self.source
    }

    #[must_use]
    pub fn into_cause(self) -> E {
        self.source
    }
}

/// Result of [`undo`](crate::traits::command_history::CommandHistory::undo).
///
/// An empty history is a routine status, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The newest command was undone and moved to the redo stack.
    Undone,
    /// Nothing to undo; no state changed.
    EmptyHistory,
}

impl UndoOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, UndoOutcome::Undone)
    }
}

/// Result of [`redo`](crate::traits::command_history::CommandHistory::redo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedoOutcome {
    /// The most recently undone command was re-applied and moved back to history.
    Redone,
    /// Nothing to redo; no state changed.
    EmptyRedo,
}

impl RedoOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, RedoOutcome::Redone)
    }
}
