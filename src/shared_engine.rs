use std::{num::NonZeroUsize, sync::Arc};

use parking_lot::Mutex;

use crate::{
    config::EngineConfig,
    engine::Engine,
    error::{CommandFailure, RedoOutcome, UndoOutcome},
    traits::{command::Command, command_history::CommandHistory},
};

/// An [`Engine`] behind a single lock, for callers on several threads.
///
/// Every operation, including `can_undo` and `can_redo`, goes through the same
/// mutex, so no caller ever observes the two stacks halfway through a move.
/// Commands still run synchronously while the lock is held.
pub struct SharedEngine<C: Command + Send> {
    engine: Mutex<Engine<C>>,
}

impl<C> SharedEngine<C>
where
    C: Command + Send,
{
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Arc<Self> {
        Arc::new(Self {
            engine: Mutex::new(Engine::with_config(config)),
        })
    }

    /// Executes `command` and records it. See [`CommandHistory::submit`].
    ///
    /// # Errors
    ///
    /// Returns the command's failure; neither stack is touched in that case.
    pub fn submit(
        &self,
        command: C,
        ctx: &mut C::Context,
    ) -> Result<(), CommandFailure<C::Error>> {
        self.engine.lock().submit(command, ctx)
    }

    /// Submits commands in order while holding the lock once for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns the first failure; commands before it stay applied.
    pub fn submit_batch<I>(
        &self,
        commands: I,
        ctx: &mut C::Context,
    ) -> Result<(), CommandFailure<C::Error>>
    where
        I: IntoIterator<Item = C>,
    {
        self.engine.lock().submit_batch(commands, ctx)
    }

    /// Undoes the newest command. See [`CommandHistory::undo`].
    ///
    /// # Errors
    ///
    /// Returns the command's failure after putting it back on history.
    pub fn undo(&self, ctx: &mut C::Context) -> Result<UndoOutcome, CommandFailure<C::Error>> {
        self.engine.lock().undo(ctx)
    }

    /// Re-applies the most recently undone command. See [`CommandHistory::redo`].
    ///
    /// # Errors
    ///
    /// Returns the command's failure after putting it back on the redo stack.
    pub fn redo(&self, ctx: &mut C::Context) -> Result<RedoOutcome, CommandFailure<C::Error>> {
        self.engine.lock().redo(ctx)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.engine.lock().can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.engine.lock().can_redo()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.engine.lock().history_len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.engine.lock().redo_len()
    }

    #[must_use]
    pub fn undo_description(&self) -> Option<String> {
        self.engine.lock().undo_description()
    }

    #[must_use]
    pub fn redo_description(&self) -> Option<String> {
        self.engine.lock().redo_description()
    }

    pub fn set_history_limit(&self, limit: Option<NonZeroUsize>) {
        self.engine.lock().set_history_limit(limit);
    }

    pub fn clear(&self) {
        self.engine.lock().clear();
    }

    /// Runs `f` with exclusive access to the engine, for check-then-act
    /// sequences that must not interleave with other callers.
    pub fn with_engine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Engine<C>) -> R,
    {
        f(&mut self.engine.lock())
    }
}

impl<C> std::fmt::Debug for SharedEngine<C>
where
    C: Command + Send,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.engine.try_lock() {
            Some(engine) => write!(f, "SharedEngine({:?})", *engine),
            None => write!(f, "SharedEngine(<locked>)"),
        }
    }
}
