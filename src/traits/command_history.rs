use std::num::NonZeroUsize;

use super::command::Command;
use crate::error::{CommandFailure, RedoOutcome, UndoOutcome};

/// The invoker side of the command pattern: runs commands and keeps the
/// history and redo stacks that make them reversible.
pub trait CommandHistory<C: Command> {
    /// Executes `command` and records it. Clears the redo stack on success.
    ///
    /// # Errors
    ///
    /// Returns the command's failure; neither stack is touched in that case.
    fn submit(&mut self, command: C, ctx: &mut C::Context)
        -> Result<(), CommandFailure<C::Error>>;

    /// Undoes the newest command in history.
    ///
    /// # Errors
    ///
    /// Returns the command's failure after putting it back on history.
    fn undo(&mut self, ctx: &mut C::Context) -> Result<UndoOutcome, CommandFailure<C::Error>>;

    /// Re-applies the most recently undone command.
    ///
    /// # Errors
    ///
    /// Returns the command's failure after putting it back on the redo stack.
    fn redo(&mut self, ctx: &mut C::Context) -> Result<RedoOutcome, CommandFailure<C::Error>>;

    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;

    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>);

    /// Submits each command in order and stops at the first failure.
    ///
    /// Commands submitted before the failure stay applied.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered.
    fn submit_batch<I>(
        &mut self,
        commands: I,
        ctx: &mut C::Context,
    ) -> Result<(), CommandFailure<C::Error>>
    where
        I: IntoIterator<Item = C>,
    {
        for command in commands {
            self.submit(command, ctx)?;
        }
        Ok(())
    }
}
