#[cfg(test)]
mod tests {
    use crate::either::*;
    use crate::error::Error;
    use std::cell::Cell;

    // ===== Construction and Inspection =====

    #[test]
    fn test_is_left_is_right() {
        let left: Either<i32, i32> = Left(1);
        let right: Either<i32, i32> = Right(1);

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn test_pure() {
        assert_eq!(Either::<&str, i32>::pure(4), Right(4));
    }

    #[test]
    fn test_left_right_options() {
        let left: Either<&str, i32> = Left("e");
        let right: Either<&str, i32> = Right(2);

        assert_eq!(left.left(), Some("e"));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some(2));
        assert_eq!(right.left(), None);
    }

    #[test]
    fn test_swap_and_not() {
        let left: Either<i32, &str> = Left(1);
        assert_eq!(left.swap(), Right(1));
        assert_eq!(!Either::<i32, &str>::Right("a"), Left("a"));
    }

    // ===== Functor / Monad =====

    #[test]
    fn test_map() {
        let plus_5 = |x: i32| x + 5;

        assert_eq!(Right::<&str, i32>(2).map(plus_5), Right(7));
        assert_eq!(Left::<&str, i32>("e").map(plus_5), Left("e"));
    }

    #[test]
    fn test_map_left_never_calls_f() {
        let calls = Cell::new(0);
        let left: Either<&str, i32> = Left("e");

        let result = left.map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(result, Left("e"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map() {
        let half = |x: i32| -> Either<String, i32> {
            if x % 2 == 0 {
                Right(x / 2)
            } else {
                Left(format!("{} is odd", x))
            }
        };

        assert_eq!(Right(8).flat_map(half), Right(4));
        assert_eq!(Right(3).flat_map(half), Left("3 is odd".to_string()));
        assert_eq!(
            Left::<String, i32>("earlier".to_string()).flat_map(half),
            Left("earlier".to_string())
        );
    }

    #[test]
    fn test_left_map() {
        let left: Either<i32, &str> = Left(2);
        let right: Either<i32, &str> = Right("a");

        assert_eq!(left.left_map(|x| x * 10), Left(20));
        assert_eq!(right.left_map(|x| x * 10), Right("a"));
    }

    fn increment(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_ap() {
        let add_one: Either<&str, fn(i32) -> i32> = Right(increment as fn(i32) -> i32);
        let missing: Either<&str, fn(i32) -> i32> = Left("no function");

        assert_eq!(Right(1).ap(add_one), Right(2));
        assert_eq!(Left::<&str, i32>("no value").ap(add_one), Left("no value"));
        assert_eq!(Left::<&str, i32>("no value").ap(missing), Left("no function"));
    }

    // ===== Queries =====

    #[test]
    fn test_for_each() {
        let mut cache = Vec::new();

        Left::<&str, i32>("e").for_each(|x| cache.push(*x));
        Right::<&str, i32>(3).for_each(|x| cache.push(*x));

        assert_eq!(cache, vec![3]);
    }

    #[test]
    fn test_exists_and_for_all() {
        let left: Either<&str, i32> = Left("e");
        let right: Either<&str, i32> = Right(4);

        assert!(!left.exists(|x| *x > 0));
        assert!(right.exists(|x| *x > 0));
        assert!(!right.exists(|x| *x > 10));

        assert!(left.for_all(|x| *x > 10));
        assert!(right.for_all(|x| *x > 0));
        assert!(!right.for_all(|x| *x > 10));
    }

    #[test]
    fn test_to_vec_and_iter() {
        assert_eq!(Left::<&str, i32>("e").to_vec(), Vec::<i32>::new());
        assert_eq!(Right::<&str, i32>(1).to_vec(), vec![1]);

        let total: i32 = Right::<&str, i32>(5).into_iter().sum();
        assert_eq!(total, 5);
    }

    // ===== Defaults =====

    #[test]
    fn test_get_or_else() {
        assert_eq!(Left::<&str, i32>("e").get_or_else(0), 0);
        assert_eq!(Right::<&str, i32>(2).get_or_else(0), 2);
        assert_eq!(Left::<&str, i32>("e") | 0, 0);
        assert_eq!(Right::<&str, i32>(2) | 0, 2);
    }

    #[test]
    fn test_or_else() {
        let fallback: Either<&str, i32> = Right(4);

        assert_eq!(Left("e").or_else(fallback), Right(4));
        assert_eq!(Right(2).or_else(fallback), Right(2));
        assert_eq!(Left::<&str, i32>("e").or_else(Left("f")), Left("f"));
    }

    #[test]
    fn test_or_else_with_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            Right::<&str, i32>(4)
        };

        assert_eq!(Right(2).or_else_with(fallback), Right(2));
        assert_eq!(calls.get(), 0);
        assert_eq!(Left("e").or_else_with(fallback), Right(4));
        assert_eq!(calls.get(), 1);
    }

    // ===== Conversions =====

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, &str> = Ok(1);
        let err: Result<i32, &str> = Err("e");

        assert_eq!(Either::from(ok), Right(1));
        assert_eq!(Either::from(err), Left("e"));
        assert_eq!(Result::from(Right::<&str, i32>(1)), Ok(1));
        assert_eq!(Left::<&str, i32>("e").into_result(), Err("e"));
    }

    #[test]
    fn test_to_try() {
        let left: Either<Error, i32> = Left(Error::panic("boom"));
        let right: Either<Error, i32> = Right(2);

        let failure = left.to_try();
        assert!(failure.is_failure());
        assert_eq!(failure.failure(), Some(&Error::panic("boom")));
        assert!(right.to_try().is_success());
    }

    // ===== Equality and Display =====

    #[test]
    fn test_structural_equality() {
        let a: Either<i32, Vec<i32>> = Right(vec![1, 2]);
        let b: Either<i32, Vec<i32>> = Right(vec![1, 2]);

        assert_eq!(a, b);
        assert_ne!(Left::<i32, i32>(1), Right(1));
        assert_eq!(Left::<i32, i32>(1), Left(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Left::<&str, i32>("boom").to_string(), "Left(\"boom\")");
        assert_eq!(Right::<&str, i32>(50).to_string(), "Right(50)");
        assert_eq!(
            Right::<&str, Vec<i32>>(vec![1, 2]).to_string(),
            "Right([1, 2])"
        );
    }
}
