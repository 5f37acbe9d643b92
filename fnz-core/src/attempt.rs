//! `Try`: the outcome of a computation that may fail
//!
//! Every callback a `Try` runs goes through [`capture`], so a panic
//! becomes a `Failure` instead of unwinding. Returned errors are kept
//! as the original object inside [`Error`]. Once a chain holds a
//! `Failure`, later `map` and `flat_map` calls hand back that same error.

use std::fmt;
use std::ops::{BitOr, ControlFlow};

use tracing::debug;

use crate::capture::capture;
use crate::either::Either;
use crate::error::{Error, Result};
use crate::monad::Monad;
use crate::sequence::{self, Step};

pub use Try::{Failure, Success};

/// Either a computed value or the error that stopped the computation.
#[derive(Debug, PartialEq)]
pub enum Try<T> {
    /// The computation returned a value
    Success(T),
    /// The computation returned an error or panicked
    Failure(Error),
}

impl<T> Try<T> {
    /// Run `f`, capturing a returned error or a panic as `Failure`.
    ///
    /// A panic still goes through the process panic hook first; see
    /// [`Try::call`].
    pub fn new<F, X>(f: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, X>,
        X: Into<anyhow::Error>,
    {
        match capture(f) {
            Ok(Ok(value)) => Success(value),
            Ok(Err(error)) => Try::captured(Error::raised(error)),
            Err(panic) => Try::captured(panic),
        }
    }

    /// Run an infallible `f`, capturing a panic as `Failure`.
    ///
    /// The process panic hook still runs before the panic is captured, so
    /// with the default hook the panic message is also printed to stderr.
    /// Install a quiet hook with [`std::panic::set_hook`] to avoid that.
    pub fn call<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match capture(f) {
            Ok(value) => Success(value),
            Err(panic) => Try::captured(panic),
        }
    }

    /// Wrap a value in `Success`
    pub fn pure(value: T) -> Self {
        Success(value)
    }

    fn captured(error: Error) -> Self {
        debug!(error = %error, panic = error.is_panic(), "captured failure");
        Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrow the captured error, if any
    pub fn failure(&self) -> Option<&Error> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Run a side effect on the success value
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Success(value) = self {
            f(value);
        }
    }

    /// Failure becomes `Left`, success becomes `Right`
    pub fn to_either(self) -> Either<Error, T> {
        match self {
            Success(value) => Either::Right(value),
            Failure(error) => Either::Left(error),
        }
    }

    /// The success value, or the captured error as `Err`
    pub fn get(self) -> Result<T> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// The success value, or `default` on failure. Also available as
    /// `attempt | default`.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// This value if successful, otherwise `other`
    pub fn or_else(self, other: Try<T>) -> Try<T> {
        match self {
            success @ Success(_) => success,
            Failure(_) => other,
        }
    }

    /// Turn a failure into a value computed from its error. A panic in
    /// `f` is captured.
    pub fn recover<F>(self, f: F) -> Try<T>
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            success @ Success(_) => success,
            Failure(error) => Try::call(move || f(error)),
        }
    }

    /// Turn a failure into the `Try` returned by `f`. A panic in `f` is
    /// captured.
    pub fn recover_with<F>(self, f: F) -> Try<T>
    where
        F: FnOnce(Error) -> Try<T>,
    {
        match self {
            success @ Success(_) => success,
            Failure(error) => capture(move || f(error)).unwrap_or_else(Try::captured),
        }
    }

    /// Map on the success value. A panic in `f` becomes `Failure`; an
    /// existing failure passes through and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Try::call(move || f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Bind through the success value. A panic in `f` becomes `Failure`;
    /// an existing failure passes through and `f` is not called.
    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Success(value) => capture(move || f(value)).unwrap_or_else(Try::captured),
            Failure(error) => Failure(error),
        }
    }

    /// Sequence `steps`, each fed the success values bound so far, then
    /// wrap `combine` of all bound values in `Success`. Stops at the first
    /// `Failure` without evaluating later steps.
    pub fn run_do<'a, U, C>(steps: Vec<Step<'a, Self>>, combine: C) -> Try<U>
    where
        C: FnOnce(Vec<T>) -> U,
    {
        sequence::run_do(steps, combine)
    }
}

impl<T> Monad for Try<T> {
    type Item = T;
    type Wrap<U> = Try<U>;

    fn unit<U>(value: U) -> Self::Wrap<U> {
        Success(value)
    }

    fn map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> U,
    {
        Try::map(self, f)
    }

    fn flat_map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> Self::Wrap<U>,
    {
        Try::flat_map(self, f)
    }

    fn guard<F>(f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        capture(f).unwrap_or_else(Try::captured)
    }

    fn branch<U>(self) -> ControlFlow<Self::Wrap<U>, Self::Item> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({:?})", value),
            Failure(Error::Raised(error)) => write!(f, "Failure({:?})", error.root_cause()),
            Failure(Error::Panic { message }) => write!(f, "Failure(Panic({:?}))", message),
        }
    }
}

impl<T> BitOr<T> for Try<T> {
    type Output = T;

    fn bitor(self, default: T) -> T {
        self.get_or_else(default)
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.get().ok().into_iter()
    }
}

impl<T> From<Result<T>> for Try<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T> From<Try<T>> for Result<T> {
    fn from(attempt: Try<T>) -> Self {
        attempt.get()
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
