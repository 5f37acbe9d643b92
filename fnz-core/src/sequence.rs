//! Do-notation as an explicit list of binding steps
//!
//! Step `i` receives the values bound by steps `0..i` and returns the next
//! wrapped value. Steps run in a loop, each one through [`Monad::guard`],
//! so a step runs at most once and never after an earlier step failed.

use std::ops::ControlFlow;

use tracing::trace;

use crate::monad::Monad;

/// One binding step: the values bound so far in, the next wrapped value out.
pub type Step<'a, M> = Box<dyn FnOnce(&[<M as Monad>::Item]) -> M + 'a>;

/// Bind `steps` in order and wrap `combine` of every bound value on the
/// success side. The first failure is returned as the overall result.
pub fn run_do<'a, M, U, C>(steps: Vec<Step<'a, M>>, combine: C) -> M::Wrap<U>
where
    M: Monad,
    C: FnOnce(Vec<M::Item>) -> U,
{
    let mut bound = Vec::with_capacity(steps.len());

    for (index, step) in steps.into_iter().enumerate() {
        trace!(step = index, "evaluating do-sequence step");
        let view = bound.as_slice();
        match M::guard(move || step(view)).branch::<U>() {
            ControlFlow::Continue(value) => bound.push(value),
            ControlFlow::Break(failure) => {
                trace!(step = index, "do-sequence short-circuited");
                return failure;
            }
        }
    }

    trace!(bound = bound.len(), "do-sequence complete");
    <M::Wrap<U> as Monad>::guard(move || M::unit(combine(bound)))
}

/// Builder for a do-sequence over one wrapper family.
///
/// ```
/// use fnz_core::{Do, Either, Right};
///
/// let product = Do::<Either<&str, i32>>::new()
///     .bind(|_| Right(10))
///     .bind(|bound| Right(bound[0] / 2))
///     .yielding(|bound| bound[0] * bound[1]);
///
/// assert_eq!(product, Right(50));
/// ```
pub struct Do<'a, M: Monad> {
    steps: Vec<Step<'a, M>>,
}

impl<'a, M: Monad> Do<'a, M> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a binding step
    pub fn bind<F>(mut self, step: F) -> Self
    where
        F: FnOnce(&[M::Item]) -> M + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run the steps and wrap `combine` of the bound values
    pub fn yielding<U, C>(self, combine: C) -> M::Wrap<U>
    where
        C: FnOnce(Vec<M::Item>) -> U,
    {
        run_do(self.steps, combine)
    }
}

impl<'a, M: Monad> Default for Do<'a, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
