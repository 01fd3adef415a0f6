use super::Command;
use crate::{
    common::{Error, Result},
    target::{Attribute, Property},
};
use std::fmt;

/// Sets the attribute `P` to a fixed value.
pub struct Assign<P: Property> {
    value: P::Value,
    prev: Option<P::Value>,
}

impl<P: Property> Assign<P> {
    pub fn new(value: P::Value) -> Self {
        Self { value, prev: None }
    }

    pub fn value(&self) -> &P::Value {
        &self.value
    }

    /// The value observed by the last `execute`, if any.
    pub fn prev(&self) -> Option<&P::Value> {
        self.prev.as_ref()
    }

    fn snapshot(&self) -> Result<P::Value> {
        self.prev
            .clone()
            .ok_or_else(|| Error::NotExecuted(self.label()))
    }

    fn label(&self) -> String {
        format!("set {} to {:?}", P::NAME, self.value)
    }
}

impl<P: Property> fmt::Debug for Assign<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assign")
            .field("property", &P::NAME)
            .field("value", &self.value)
            .field("prev", &self.prev)
            .finish()
    }
}

impl<P, T> Command<T> for Assign<P>
where
    P: Property,
    T: Attribute<P> + ?Sized,
{
    fn execute(&mut self, target: &mut T) -> Result<()> {
        self.prev = Some(target.get().map_err(Error::Target)?);
        target.set(self.value.clone()).map_err(Error::Target)
    }

    fn undo(&mut self, target: &mut T) -> Result<()> {
        let prev = self.snapshot()?;
        target.set(prev).map_err(Error::Target)
    }

    fn redo(&mut self, target: &mut T) -> Result<()> {
        self.snapshot()?;
        target.set(self.value.clone()).map_err(Error::Target)
    }

    fn name(&self) -> String {
        self.label()
    }
}
