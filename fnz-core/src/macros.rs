//! `mdo!`: do-notation over any [`Monad`](crate::Monad)

/// Chain wrapped computations, binding each success value to a name.
///
/// `x <- expr;` binds the success value of `expr` for the rest of the
/// block, `let pat = expr;` is an ordinary binding, and the block ends
/// with `yield expr`, whose value is wrapped on the success side. The
/// first failure is returned unchanged and nothing after it is evaluated.
///
/// ```
/// use fnz_core::{mdo, Either, Left, Right};
///
/// let total: Either<&str, i32> = mdo! {
///     x <- Right(1);
///     let y = x + 1;
///     z <- Right(y * 10);
///     yield x + z
/// };
/// assert_eq!(total, Right(21));
///
/// let failed: Either<&str, i32> = mdo! {
///     x <- Left::<&str, i32>("boom");
///     y <- Right(x + 1);
///     yield x * y
/// };
/// assert_eq!(failed, Left("boom"));
/// ```
#[macro_export]
macro_rules! mdo {
    (let $binding:pat = $value:expr; $($rest:tt)+) => {{
        let $binding = $value;
        $crate::mdo!($($rest)+)
    }};
    ($binding:ident <- $value:expr; yield $result:expr $(;)?) => {
        $crate::Monad::map($value, move |$binding| $result)
    };
    (_ <- $value:expr; yield $result:expr $(;)?) => {
        $crate::Monad::map($value, move |_| $result)
    };
    ($binding:ident <- $value:expr; $($rest:tt)+) => {
        $crate::Monad::flat_map($value, move |$binding| $crate::mdo!($($rest)+))
    };
    (_ <- $value:expr; $($rest:tt)+) => {
        $crate::Monad::flat_map($value, move |_| $crate::mdo!($($rest)+))
    };
}
