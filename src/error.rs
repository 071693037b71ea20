use core::fmt::{Display, Formatter};
use std::collections::TryReserveError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The backing storage could not be allocated or grown.
    AllocationFailed,
    /// An absent element was offered for insertion.
    NullElement,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailed
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::AllocationFailed => write!(fmt, "heap storage allocation failed"),
            Error::NullElement => write!(fmt, "cannot insert an absent element"),
        }
    }
}

impl std::error::Error for Error {}
