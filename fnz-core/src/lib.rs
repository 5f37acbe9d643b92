//! Composable result wrappers
//!
//! This crate provides two right-biased wrappers and a way to sequence
//! them:
//! - [`Either`]: `Left(L)` or `Right(R)`, with no error capture
//! - [`Try`]: `Success(T)` or `Failure(Error)`, capturing returned errors
//!   and panics from every callback it runs
//! - [`Do`] / [`run_do`] and the [`mdo!`] macro: do-notation that stops at
//!   the first failure
//!
//! Both wrappers implement [`Monad`], which is all the sequencer needs.

pub mod attempt;
pub mod capture;
pub mod either;
pub mod error;
pub mod func;
mod macros;
pub mod monad;
pub mod sequence;

pub use attempt::{Failure, Success, Try};
pub use capture::capture;
pub use either::{Either, Left, Right};
pub use error::{Error, Result};
pub use monad::Monad;
pub use sequence::{run_do, Do, Step};
