//! The capability contract a target exposes to commands.

use std::fmt;

/// A marker type naming one mutable attribute of a target.
///
/// ```
/// use revhist::Property;
///
/// enum Speed {}
///
/// impl Property for Speed {
///     type Value = i32;
///     const NAME: &'static str = "speed";
/// }
/// ```
pub trait Property: 'static {
    type Value: Clone + fmt::Debug;
    const NAME: &'static str;
}

/// Read and write access to the attribute `P`.
///
/// Both operations may fail, e.g. when the underlying device rejects the request.
pub trait Attribute<P: Property> {
    fn get(&self) -> anyhow::Result<P::Value>;
    fn set(&mut self, value: P::Value) -> anyhow::Result<()>;
}
