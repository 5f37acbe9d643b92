//! Error type captured by [`Try`](crate::Try)

use std::fmt::{Debug, Display};
use thiserror::Error;

/// An error captured at a failure site.
///
/// Returned errors are kept inside an [`anyhow::Error`], which owns the
/// original object; [`Error::downcast_ref`] hands it back unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A callback panicked
    #[error("panicked: {message}")]
    Panic { message: String },

    /// A callback returned an error
    #[error(transparent)]
    Raised(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Capture a returned error
    pub fn raised<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Error::Raised(error.into())
    }

    /// Capture a panic message
    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic {
            message: message.into(),
        }
    }

    /// Check if this error came from a panic
    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panic { .. })
    }

    /// Borrow the raised error as its original type
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        match self {
            Error::Raised(error) => error.downcast_ref::<E>(),
            Error::Panic { .. } => None,
        }
    }

    /// Take the raised error back as its original type
    pub fn downcast<E>(self) -> std::result::Result<E, Self>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        match self {
            Error::Raised(error) => error.downcast::<E>().map_err(Error::Raised),
            panic @ Error::Panic { .. } => Err(panic),
        }
    }
}

/// Two captured errors are equal when they are the same kind, render the
/// same message and have the same root cause (compared through `Debug`,
/// which names the concrete error type for derived impls).
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Panic { message: a }, Error::Panic { message: b }) => a == b,
            (Error::Raised(a), Error::Raised(b)) => {
                a.to_string() == b.to_string()
                    && format!("{:?}", a.root_cause()) == format!("{:?}", b.root_cause())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
