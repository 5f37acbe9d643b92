//! Capability shared by [`Either`](crate::Either) and [`Try`](crate::Try)
//!
//! The do-sequencer and the `mdo!` macro only speak this trait, so they
//! work the same for every wrapper family.

use std::ops::ControlFlow;

/// A right-biased wrapper family that can be mapped and bound.
pub trait Monad: Sized {
    /// The success-side payload
    type Item;

    /// The same family holding a `U` on its success side
    type Wrap<U>: Monad<Item = U>;

    /// Wrap a value on the success side
    fn unit<U>(value: U) -> Self::Wrap<U>;

    /// Transform the success-side value
    fn map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> U;

    /// Bind the success-side value into the next wrapped computation
    fn flat_map<U, F>(self, f: F) -> Self::Wrap<U>
    where
        F: FnOnce(Self::Item) -> Self::Wrap<U>;

    /// Build a value with `f`, capturing whatever the family captures
    /// (for `Try`, a panic in `f`).
    fn guard<F>(f: F) -> Self
    where
        F: FnOnce() -> Self;

    /// Split into the success-side value, or the failure re-typed for a
    /// `U` payload and otherwise unchanged.
    fn branch<U>(self) -> ControlFlow<Self::Wrap<U>, Self::Item>;
}
