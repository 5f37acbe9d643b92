//! Small combinators

/// Return the argument unchanged
pub fn identity<T>(value: T) -> T {
    value
}

/// Build a function that ignores its argument and always returns `value`
pub fn constantly<T, A>(value: T) -> impl Fn(A) -> T
where
    T: Clone,
{
    move |_| value.clone()
}
