use crate::{command::Command, common::Result};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, num::NonZeroUsize};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undoable commands. The oldest entry is dropped when
    /// exceeded; `None` keeps everything.
    pub limit: Option<NonZeroUsize>,
}

/// Undo/redo bookkeeping for commands of type `C`.
///
/// The target is never owned: every operation borrows it for the duration of
/// the call. A command lives on exactly one stack at a time and is only ever
/// moved between them, so a failed operation leaves both stacks as they were.
#[derive(Debug)]
pub struct History<C> {
    undo_stack: VecDeque<C>,
    redo_stack: Vec<C>,
    config: HistoryConfig,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::with_config(HistoryConfig::default())
    }
}

impl<C> History<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: vec![],
            config,
        }
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Executes `com` and records it.
    ///
    /// On success the redo history is discarded. On failure `com` is dropped
    /// and neither stack changes.
    pub fn execute_cmd<T>(&mut self, target: &mut T, mut com: C) -> Result<()>
    where
        T: ?Sized,
        C: Command<T>,
    {
        log::debug!("executing `{}`", com.name());
        com.execute(target)?;
        self.redo_stack.clear();
        self.undo_stack.push_back(com);
        self.enforce_limit::<T>();
        Ok(())
    }

    /// Reverts the most recent command. Does nothing if there is none.
    pub fn undo<T>(&mut self, target: &mut T) -> Result<()>
    where
        T: ?Sized,
        C: Command<T>,
    {
        let Some(com) = self.undo_stack.back_mut() else {
            log::trace!("nothing to undo");
            return Ok(());
        };
        log::debug!("undoing `{}`", com.name());
        com.undo(target)?;
        if let Some(com) = self.undo_stack.pop_back() {
            self.redo_stack.push(com);
        }
        Ok(())
    }

    /// Reapplies the most recently undone command. Does nothing if there is none.
    pub fn redo<T>(&mut self, target: &mut T) -> Result<()>
    where
        T: ?Sized,
        C: Command<T>,
    {
        let Some(com) = self.redo_stack.last_mut() else {
            log::trace!("nothing to redo");
            return Ok(());
        };
        log::debug!("redoing `{}`", com.name());
        com.redo(target)?;
        if let Some(com) = self.redo_stack.pop() {
            self.undo_stack.push_back(com);
        }
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty() && self.redo_stack.is_empty()
    }

    /// The command the next `undo` would revert.
    pub fn peek_undo(&self) -> Option<&C> {
        self.undo_stack.back()
    }

    /// The command the next `redo` would reapply.
    pub fn peek_redo(&self) -> Option<&C> {
        self.redo_stack.last()
    }

    /// Forgets every recorded command. Targets are left untouched.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_limit<T>(&mut self)
    where
        T: ?Sized,
        C: Command<T>,
    {
        let Some(limit) = self.config.limit else {
            return;
        };
        while self.undo_stack.len() > limit.get() {
            if let Some(com) = self.undo_stack.pop_front() {
                log::trace!("history limit reached, forgetting `{}`", com.name());
            }
        }
    }
}
