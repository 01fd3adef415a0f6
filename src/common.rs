use derive_more::Display;
use std::error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Display)]
pub enum Error {
    /// `undo` or `redo` was called on a command whose `execute` never ran.
    #[display(fmt = "`{}` has not been executed", _0)]
    NotExecuted(String),
    /// The target rejected a read or write.
    #[display(fmt = "target operation failed: {}", _0)]
    Target(anyhow::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::NotExecuted(_) => None,
            Error::Target(err) => Some(&**err),
        }
    }
}
