//! Scoped call helper that turns a panic into an [`Error`]

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};

/// Run `f`, returning its value or the message of the panic it raised.
///
/// This is the only place panics are caught; `Try` routes every callback
/// through here.
///
/// Catching does not bypass the panic hook. The hook installed with
/// [`std::panic::set_hook`] (by default, the one printing
/// `thread '..' panicked at ..` to stderr) runs before `capture` returns.
/// Callers that want captured panics to stay silent swap the hook:
///
/// ```
/// use fnz_core::{capture, Error};
///
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|_| {}));
/// let result = capture(|| -> i32 { panic!("quiet") });
/// std::panic::set_hook(previous);
///
/// assert_eq!(result.unwrap_err(), Error::panic("quiet"));
/// ```
pub fn capture<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| Error::panic(panic_message(&*payload)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
