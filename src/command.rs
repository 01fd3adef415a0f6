mod assign;
mod batch;
mod switch;

pub use self::{assign::Assign, batch::Batch, switch::Switch};

use crate::common::Result;
use std::fmt;

/// A reversible unit of work over a target of type `T`.
///
/// The target is borrowed for each call and never stored, so a command can
/// outlive any particular borrow of it.
pub trait Command<T: ?Sized>: fmt::Debug {
    /// Snapshots whatever `undo` will need, then applies the change.
    ///
    /// This is not idempotent: a second call overwrites the snapshot with the
    /// already-changed state.
    fn execute(&mut self, target: &mut T) -> Result<()>;

    /// Restores the state captured by `execute`.
    ///
    /// Fails with [`Error::NotExecuted`](crate::Error::NotExecuted) if `execute` never ran.
    fn undo(&mut self, target: &mut T) -> Result<()>;

    /// Reapplies the change after an `undo`, keeping the original snapshot.
    fn redo(&mut self, target: &mut T) -> Result<()>;

    fn name(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T, C> Command<T> for Box<C>
where
    T: ?Sized,
    C: Command<T> + ?Sized,
{
    fn execute(&mut self, target: &mut T) -> Result<()> {
        (**self).execute(target)
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        (**self).undo(target)
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        (**self).redo(target)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
