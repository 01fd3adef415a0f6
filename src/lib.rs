//! Reversible commands with chronological undo/redo.
//!
//! A [`History`] runs [`Command`]s against a borrowed target and records them
//! so that they can be undone and redone in order. Executing a new command
//! discards everything that could have been redone.
//!
//! ```
//! use revhist::{Assign, Attribute, History, Property};
//!
//! enum Speed {}
//!
//! impl Property for Speed {
//!     type Value = i32;
//!     const NAME: &'static str = "speed";
//! }
//!
//! #[derive(Default)]
//! struct Fan {
//!     speed: i32,
//! }
//!
//! impl Attribute<Speed> for Fan {
//!     fn get(&self) -> anyhow::Result<i32> {
//!         Ok(self.speed)
//!     }
//!
//!     fn set(&mut self, speed: i32) -> anyhow::Result<()> {
//!         self.speed = speed;
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> revhist::Result<()> {
//! let mut fan = Fan::default();
//! let mut history = History::new();
//! history.execute_cmd(&mut fan, Assign::<Speed>::new(2))?;
//! history.undo(&mut fan)?;
//! assert_eq!(fan.speed, 0);
//! history.redo(&mut fan)?;
//! assert_eq!(fan.speed, 2);
//! # Ok(())
//! # }
//! ```

mod command;
mod common;
mod history;
mod target;

pub use crate::{
    command::{Assign, Batch, Command, Switch},
    common::{Error, Result},
    history::{History, HistoryConfig},
    target::{Attribute, Property},
};
