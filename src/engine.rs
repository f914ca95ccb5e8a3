use std::{collections::VecDeque, num::NonZeroUsize};

use tracing::{debug, trace, warn};

use crate::{
    config::EngineConfig,
    error::{CommandFailure, Phase, RedoOutcome, UndoOutcome},
    traits::{command::Command, command_history::CommandHistory},
};

/// Upper bound on what a history limit preallocates.
const INITIAL_CAPACITY: usize = 16;

/// Single-owner undo/redo engine.
///
/// Both stacks keep their newest entry at the back. A command lives in at most
/// one of them at a time: `undo` moves it from history to redo, `redo` moves it
/// back, and a fresh `submit` drops everything on the redo stack. When a command
/// fails, it is returned to the stack it came from before the error is reported.
///
/// Use [`SharedEngine`](crate::shared_engine::SharedEngine) when several threads
/// need to drive the same history.
pub struct Engine<C: Command> {
    history: VecDeque<C>,
    redo: VecDeque<C>,
    history_limit: Option<NonZeroUsize>,
}

impl<C: Command> Engine<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let capacity = config
            .history_limit
            .map_or(0, |limit| limit.get().min(INITIAL_CAPACITY));
        Self {
            history: VecDeque::with_capacity(capacity),
            redo: VecDeque::with_capacity(capacity),
            history_limit: config.history_limit,
        }
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            history_limit: self.history_limit,
        }
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Applied commands, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &C> + ExactSizeIterator {
        self.history.iter()
    }

    /// Undone commands, from the bottom of the redo stack to the one `redo` would pick next.
    pub fn redo_stack(&self) -> impl DoubleEndedIterator<Item = &C> + ExactSizeIterator {
        self.redo.iter()
    }

    #[must_use]
    pub fn undo_description(&self) -> Option<String> {
        self.history.back().map(|command| command.description().into_owned())
    }

    #[must_use]
    pub fn redo_description(&self) -> Option<String> {
        self.redo.back().map(|command| command.description().into_owned())
    }

    /// Drops every command on both stacks.
    pub fn clear(&mut self) {
        let discarded = self.history.len() + self.redo.len();
        self.history.clear();
        self.redo.clear();
        trace!(discarded, "command history cleared");
    }

    fn push_history(&mut self, command: C) {
        if let Some(limit) = self.history_limit {
            let evicted = evict_front(&mut self.history, limit.get() - 1);
            if evicted > 0 {
                trace!(evicted, limit = limit.get(), "oldest command evicted from history");
            }
        }

        self.history.push_back(command);
    }

    fn discard_redo(&mut self) {
        if !self.redo.is_empty() {
            trace!(discarded = self.redo.len(), "redo stack discarded");
            self.redo.clear();
        }
    }
}

/// Drops entries from the front until at most `keep` remain.
fn evict_front<C>(stack: &mut VecDeque<C>, keep: usize) -> usize {
    let evicted = stack.len().saturating_sub(keep);
    stack.drain(..evicted);
    evicted
}

impl<C: Command> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> std::fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("history", &self.history.len())
            .field("redo", &self.redo.len())
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

impl<C: Command> CommandHistory<C> for Engine<C> {
    fn submit(
        &mut self,
        mut command: C,
        ctx: &mut C::Context,
    ) -> Result<(), CommandFailure<C::Error>> {
        if let Err(source) = command.execute(ctx) {
            let description = command.description();
            warn!(phase = %Phase::Execute, command = %description, "command failed");
            return Err(CommandFailure::new(Phase::Execute, description, source));
        }

        self.discard_redo();
        let description = command.description().into_owned();
        self.push_history(command);
        debug!(command = %description, history = self.history.len(), "command submitted");

        Ok(())
    }

    fn undo(&mut self, ctx: &mut C::Context) -> Result<UndoOutcome, CommandFailure<C::Error>> {
        let Some(mut command) = self.history.pop_back() else {
            trace!("nothing to undo");
            return Ok(UndoOutcome::EmptyHistory);
        };

        if let Err(source) = command.undo(ctx) {
            let failure = CommandFailure::new(Phase::Undo, command.description(), source);
            self.history.push_back(command);
            warn!(phase = %Phase::Undo, command = failure.description(), "command failed");
            return Err(failure);
        }

        debug!(
            command = %command.description(),
            redo = self.redo.len() + 1,
            "command undone"
        );
        self.redo.push_back(command);

        Ok(UndoOutcome::Undone)
    }

    fn redo(&mut self, ctx: &mut C::Context) -> Result<RedoOutcome, CommandFailure<C::Error>> {
        let Some(mut command) = self.redo.pop_back() else {
            trace!("nothing to redo");
            return Ok(RedoOutcome::EmptyRedo);
        };

        if let Err(source) = command.redo(ctx) {
            let failure = CommandFailure::new(Phase::Redo, command.description(), source);
            self.redo.push_back(command);
            warn!(phase = %Phase::Redo, command = failure.description(), "command failed");
            return Err(failure);
        }

        let description = command.description().into_owned();
        self.push_history(command);
        debug!(command = %description, history = self.history.len(), "command redone");

        Ok(RedoOutcome::Redone)
    }

    fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.history_limit = limit;

        if let Some(limit) = limit {
            let history = evict_front(&mut self.history, limit.get());
            let redo = evict_front(&mut self.redo, limit.get());
            if history + redo > 0 {
                trace!(history, redo, limit = limit.get(), "commands evicted by new history limit");
            }
        }
    }
}
