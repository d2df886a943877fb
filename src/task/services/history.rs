//! Undo/redo history for executed commands.

use std::fmt;

/// A reversible mutation.
///
/// Both halves are required, so a command that cannot be undone cannot be
/// recorded.
pub trait Command {
    /// Value the command mutates.
    type Target: ?Sized;
    /// Failure returned by either half.
    type Error;

    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// Applies the mutation.
    ///
    /// # Errors
    ///
    /// Returns the command error when the mutation cannot be applied.
    fn execute(&mut self, target: &Self::Target) -> Result<(), Self::Error>;

    /// Reverts a previously applied mutation.
    ///
    /// # Errors
    ///
    /// Returns the command error when the mutation cannot be reverted.
    fn undo(&mut self, target: &Self::Target) -> Result<(), Self::Error>;
}

/// Executed and undone command stacks.
///
/// A recorded command lives in exactly one of the two stacks. Executing a new
/// command discards everything that could have been redone.
pub struct CommandHistory<C> {
    history: Vec<C>,
    redo: Vec<C>,
}

impl<C> CommandHistory<C>
where
    C: Command,
{
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Executes `command` and records it for undo.
    ///
    /// A command that fails to execute is dropped and the history is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the command's error when execution fails.
    pub fn execute(&mut self, mut command: C, target: &C::Target) -> Result<(), C::Error> {
        command.execute(target)?;
        tracing::debug!(command = command.label(), "executed command");
        self.redo.clear();
        self.history.push(command);
        Ok(())
    }

    /// Reverts the most recently executed command.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. A command whose undo
    /// fails stays on the history stack.
    ///
    /// # Errors
    ///
    /// Returns the command's error when the undo fails.
    pub fn undo(&mut self, target: &C::Target) -> Result<bool, C::Error> {
        let Some(mut command) = self.history.pop() else {
            return Ok(false);
        };
        match command.undo(target) {
            Ok(()) => {
                tracing::debug!(command = command.label(), "undid command");
                self.redo.push(command);
                Ok(true)
            }
            Err(err) => {
                self.history.push(command);
                Err(err)
            }
        }
    }

    /// Re-applies the most recently undone command.
    ///
    /// Returns `Ok(false)` when there is nothing to redo. A command whose
    /// re-execution fails stays on the redo stack.
    ///
    /// # Errors
    ///
    /// Returns the command's error when re-execution fails.
    pub fn redo(&mut self, target: &C::Target) -> Result<bool, C::Error> {
        let Some(mut command) = self.redo.pop() else {
            return Ok(false);
        };
        match command.execute(target) {
            Ok(()) => {
                tracing::debug!(command = command.label(), "redid command");
                self.history.push(command);
                Ok(true)
            }
            Err(err) => {
                self.redo.push(command);
                Err(err)
            }
        }
    }

    /// Returns `true` when [`Self::undo`] would act.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `true` when [`Self::redo`] would act.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the label of the command [`Self::undo`] would revert.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&'static str> {
        self.history.last().map(Command::label)
    }

    /// Returns the label of the command [`Self::redo`] would re-apply.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&'static str> {
        self.redo.last().map(Command::label)
    }

    /// Number of commands available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of commands available to redo.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Forgets every recorded command.
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo.clear();
    }
}

impl<C> Default for CommandHistory<C>
where
    C: Command,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CommandHistory<C>
where
    C: Command,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("history", &self.history.iter().map(Command::label).collect::<Vec<_>>())
            .field("redo", &self.redo.iter().map(Command::label).collect::<Vec<_>>())
            .finish()
    }
}
