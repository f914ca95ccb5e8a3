use std::borrow::Cow;

/// A reversible unit of work that acts on a receiver supplied by the caller.
///
/// Parameters are captured when the command is built; the receiver itself is
/// passed in on every call as `ctx`, so the engine that sequences commands
/// never needs to know what the receiver is.
///
/// # Associated Types
///
/// * `Context`: The receiver the command acts upon.
/// * `Error`: The failure cause reported by `execute` or `undo`.
///
/// # Required Methods
///
/// * `execute(&mut self, ctx: &mut Self::Context)`: Applies the command.
/// * `undo(&mut self, ctx: &mut Self::Context)`: Reverts a previous `execute`.
///
/// # Provided Methods
///
/// * `redo(&mut self, ctx: &mut Self::Context)`: Re-applies the command by calling `execute`. Override it if re-applying differs from the first application.
/// * `description(&self) -> Cow<str>`: A human readable name. The default implementation returns "Unknown command".
///
/// # Example
///
/// ```
/// use command_engine::prelude::Command;
/// use std::borrow::Cow;
/// use std::convert::Infallible;
///
/// struct Add(i32);
///
/// impl Command for Add {
///     type Context = i32;
///     type Error = Infallible;
///
///     fn execute(&mut self, ctx: &mut i32) -> Result<(), Infallible> {
///         *ctx += self.0;
///         Ok(())
///     }
///
///     fn undo(&mut self, ctx: &mut i32) -> Result<(), Infallible> {
///         *ctx -= self.0;
///         Ok(())
///     }
///
///     fn description(&self) -> Cow<'_, str> {
///         Cow::Owned(format!("Add {}", self.0))
///     }
/// }
///
/// let mut total = 0;
/// let mut add = Add(4);
/// add.execute(&mut total).unwrap();
/// assert_eq!(total, 4);
/// add.undo(&mut total).unwrap();
/// assert_eq!(total, 0);
/// ```
pub trait Command {
    type Context: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies the command to the receiver.
    ///
    /// # Errors
    ///
    /// Returns the command's own error if the receiver rejected the change.
    /// A failed `execute` must leave the receiver as it found it.
    fn execute(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Reverts the effect of the last successful `execute`.
    ///
    /// # Errors
    ///
    /// Returns the command's own error if the inversion could not be applied.
    fn undo(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Re-applies the command after an `undo`. Calls `execute` by default.
    ///
    /// # Errors
    ///
    /// Same as [`Command::execute`].
    fn redo(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        self.execute(ctx)
    }

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}

impl<C> Command for Box<C>
where
    C: Command + ?Sized,
{
    type Context = C::Context;
    type Error = C::Error;

    fn execute(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        (**self).execute(ctx)
    }

    fn undo(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        (**self).undo(ctx)
    }

    fn redo(&mut self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        (**self).redo(ctx)
    }

    fn description(&self) -> Cow<'_, str> {
        (**self).description()
    }
}
