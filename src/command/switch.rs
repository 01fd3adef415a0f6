use super::{Assign, Command};
use crate::{
    common::Result,
    target::{Attribute, Property},
};
use std::fmt;

/// Turns the boolean attribute `P` on or off.
pub struct Switch<P: Property<Value = bool>>(Assign<P>);

impl<P: Property<Value = bool>> Switch<P> {
    pub fn on() -> Self {
        Self(Assign::new(true))
    }

    pub fn off() -> Self {
        Self(Assign::new(false))
    }

    pub fn turns_on(&self) -> bool {
        *self.0.value()
    }
}

impl<P: Property<Value = bool>> fmt::Debug for Switch<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("property", &P::NAME)
            .field("on", &self.turns_on())
            .field("prev", &self.0.prev())
            .finish()
    }
}

impl<P, T> Command<T> for Switch<P>
where
    P: Property<Value = bool>,
    T: Attribute<P> + ?Sized,
{
    fn execute(&mut self, target: &mut T) -> Result<()> {
        self.0.execute(target)
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        self.0.undo(target)
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        self.0.redo(target)
    }

    fn name(&self) -> String {
        let state = if self.turns_on() { "on" } else { "off" };
        format!("switch {} {}", P::NAME, state)
    }
}
