use super::Command;
use crate::common::{Error, Result};

/// Several commands applied as one.
///
/// Children run in order and are undone in reverse order. If a child fails,
/// the children already processed in that step are reverted so the target is
/// left as it was before the step.
#[derive(Debug)]
pub struct Batch<C> {
    label: String,
    coms: Vec<C>,
    executed: bool,
}

impl<C> Batch<C> {
    pub fn new(label: impl Into<String>, coms: Vec<C>) -> Self {
        Self {
            label: label.into(),
            coms,
            executed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.coms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coms.is_empty()
    }

    fn ensure_executed(&self) -> Result<()> {
        if self.executed {
            Ok(())
        } else {
            Err(Error::NotExecuted(self.label.clone()))
        }
    }
}

impl<T, C> Command<T> for Batch<C>
where
    T: ?Sized,
    C: Command<T>,
{
    fn execute(&mut self, target: &mut T) -> Result<()> {
        for i in 0..self.coms.len() {
            if let Err(err) = self.coms[i].execute(target) {
                self.rollback_undo(target, i);
                return Err(err);
            }
        }
        self.executed = true;
        Ok(())
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        self.ensure_executed()?;
        for i in (0..self.coms.len()).rev() {
            if let Err(err) = self.coms[i].undo(target) {
                for com in &mut self.coms[i + 1..] {
                    if let Err(e) = com.redo(target) {
                        log::error!("failed to roll back `{}`: {}", com.name(), e);
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        self.ensure_executed()?;
        for i in 0..self.coms.len() {
            if let Err(err) = self.coms[i].redo(target) {
                self.rollback_undo(target, i);
                return Err(err);
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        self.label.clone()
    }
}

impl<C> Batch<C> {
    /// Undoes `coms[..end]` in reverse order, logging failures.
    fn rollback_undo<T>(&mut self, target: &mut T, end: usize)
    where
        T: ?Sized,
        C: Command<T>,
    {
        for com in self.coms[..end].iter_mut().rev() {
            if let Err(e) = com.undo(target) {
                log::error!("failed to roll back `{}`: {}", com.name(), e);
            }
        }
    }
}
