//! Right-biased disjoint union
//!
//! By convention `Left` holds an error value and `Right` a success. The
//! left type can be anything; nothing here catches panics, so a callback
//! that panics unwinds straight through `map` and `flat_map`.

use std::fmt;
use std::ops::{BitOr, ControlFlow, Not};

use crate::attempt::Try;
use crate::error::Error;
use crate::monad::Monad;
use crate::sequence::{self, Step};

pub use Either::{Left, Right};

/// Holds either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// Failure side
    Left(L),
    /// Success side
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wrap a value in `Right`
    pub fn pure(value: R) -> Self {
        Right(value)
    }

    /// Check if this is a `Left`
    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    /// Check if this is a `Right`
    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// Get the left value if present
    pub fn left(self) -> Option<L> {
        match self {
            Left(left) => Some(left),
            Right(_) => None,
        }
    }

    /// Get the right value if present
    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(right) => Some(right),
        }
    }

    /// Borrow both sides
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(right),
        }
    }

    /// Flip the sides. Also available as `!either`.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Left(left) => Right(left),
            Right(right) => Left(right),
        }
    }

    /// Map on the right side. A `Left` passes through untouched and `f`
    /// is not called.
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => Right(f(right)),
        }
    }

    /// Bind through the right side. The result of `f` is returned as is.
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Left(left) => Left(left),
            Right(right) => f(right),
        }
    }

    /// Map on the left side
    pub fn left_map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Left(left) => Left(f(left)),
            Right(right) => Right(right),
        }
    }

    /// Run a side effect on the right value
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&R),
    {
        if let Right(right) = self {
            f(right);
        }
    }

    /// True if this is a right value satisfying `predicate`
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Left(_) => false,
            Right(right) => predicate(right),
        }
    }

    /// True if this is a left value, or a right value satisfying `predicate`
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Left(_) => true,
            Right(right) => predicate(right),
        }
    }

    /// Empty for a left value, one element for a right value
    pub fn to_vec(self) -> Vec<R> {
        self.into_iter().collect()
    }

    /// The right value, or `default` for a left value. Also available as
    /// `either | default`.
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Left(_) => default,
            Right(right) => right,
        }
    }

    /// This value if right, otherwise `other`
    pub fn or_else(self, other: Either<L, R>) -> Either<L, R> {
        match self {
            Left(_) => other,
            right @ Right(_) => right,
        }
    }

    /// This value if right, otherwise the result of `f`
    pub fn or_else_with<F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce() -> Either<L, R>,
    {
        match self {
            Left(_) => f(),
            right @ Right(_) => right,
        }
    }

    /// Apply a function held on the right of `f` to the right of this value.
    /// A left on the function side wins over a left on this side.
    pub fn ap<R2, F>(self, f: Either<L, F>) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        f.flat_map(|g| self.map(g))
    }

    /// Convert to a `Result`, left becoming `Err`
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Left(left) => Err(left),
            Right(right) => Ok(right),
        }
    }

    /// Sequence `steps`, each fed the right values bound so far, then
    /// wrap `combine` of all bound values in `Right`. Stops at the first
    /// `Left` without evaluating later steps.
    pub fn run_do<'a, U, C>(steps: Vec<Step<'a, Self>>, combine: C) -> Either<L, U>
    where
        C: FnOnce(Vec<R>) -> U,
    {
        sequence::run_do(steps, combine)
    }
}

impl<L, R> Either<L, R>
where
    L: Into<Error>,
{
    /// Convert to a `Try`: left becomes `Failure`, right `Success`
    pub fn to_try(self) -> Try<R> {
        match self {
            Left(left) => Try::Failure(left.into()),
            Right(right) => Try::Success(right),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    type Item = R;
    type Wrap<U> = Either<L, U>;

    fn unit<U>(value: U) -> Self::Wrap<U> {
        Right(value)
    }

    fn map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> U,
    {
        Either::map(self, f)
    }

    fn flat_map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> Self::Wrap<U>,
    {
        Either::flat_map(self, f)
    }

    fn guard<F>(f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        f()
    }

    fn branch<U>(self) -> ControlFlow<Self::Wrap<U>, Self::Item> {
        match self {
            Left(value) => ControlFlow::Break(Left(value)),
            Right(value) => ControlFlow::Continue(value),
        }
    }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Left(left) => write!(f, "Left({:?})", left),
            Right(right) => write!(f, "Right({:?})", right),
        }
    }
}

impl<L, R> BitOr<R> for Either<L, R> {
    type Output = R;

    fn bitor(self, default: R) -> R {
        self.get_or_else(default)
    }
}

impl<L, R> Not for Either<L, R> {
    type Output = Either<R, L>;

    fn not(self) -> Either<R, L> {
        self.swap()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Right(right),
            Err(left) => Left(left),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
#[path = "either_tests.rs"]
mod tests;
