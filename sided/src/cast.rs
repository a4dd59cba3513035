//! Widening and narrowing between related `Either` instantiations.
//!
//! Two surfaces cover the "treat an `Either` over more specific types as an
//! `Either` over more general ones, and back" requirement:
//!
//! - a conversion-trait surface, where the relation between types is an
//!   infallible [`From`] (widening) or a fallible [`TryInto`] (narrowing),
//!   checked at the instantiation site;
//! - a type-erased surface, where a side is erased to `Box<dyn Any>` and
//!   recovered by a runtime-checked downcast.
//!
//! In both, widening never fails and narrowing checks only the active
//! side — the inactive side is carried through untouched.

use std::any::{type_name, Any};

use crate::either::Either;
use crate::error::{CastError, Side};

impl<L, R> Either<L, R> {
    /// Widens the Left type. Always succeeds; the Right side is untouched.
    pub fn widen_left<L2: From<L>>(self) -> Either<L2, R> {
        match self {
            Either::Left(l) => Either::Left(l.into()),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Widens the Right type. Always succeeds; the Left side is untouched.
    pub fn widen_right<R2: From<R>>(self) -> Either<L, R2> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r.into()),
        }
    }

    /// Widens both sides at once.
    pub fn widen<L2: From<L>, R2: From<R>>(self) -> Either<L2, R2> {
        match self {
            Either::Left(l) => Either::Left(l.into()),
            Either::Right(r) => Either::Right(r.into()),
        }
    }

    /// Narrows the Left type, checking the conversion at runtime.
    ///
    /// Fails with [`CastError`] iff the Left side is active and its value
    /// does not convert. A Right value passes through unchecked.
    pub fn narrow_left<L2>(self) -> Result<Either<L2, R>, CastError>
    where
        L: TryInto<L2>,
    {
        match self {
            Either::Left(l) => match l.try_into() {
                Ok(narrowed) => Ok(Either::Left(narrowed)),
                Err(_) => Err(CastError {
                    side: Side::Left,
                    from: type_name::<L>(),
                    to: type_name::<L2>(),
                }),
            },
            Either::Right(r) => Ok(Either::Right(r)),
        }
    }

    /// Narrows the Right type, checking the conversion at runtime.
    pub fn narrow_right<R2>(self) -> Result<Either<L, R2>, CastError>
    where
        R: TryInto<R2>,
    {
        match self {
            Either::Left(l) => Ok(Either::Left(l)),
            Either::Right(r) => match r.try_into() {
                Ok(narrowed) => Ok(Either::Right(narrowed)),
                Err(_) => Err(CastError {
                    side: Side::Right,
                    from: type_name::<R>(),
                    to: type_name::<R2>(),
                }),
            },
        }
    }

    /// Narrows both sides; only the active one is actually checked.
    pub fn narrow<L2, R2>(self) -> Result<Either<L2, R2>, CastError>
    where
        L: TryInto<L2>,
        R: TryInto<R2>,
    {
        match self {
            Either::Left(l) => match l.try_into() {
                Ok(narrowed) => Ok(Either::Left(narrowed)),
                Err(_) => Err(CastError {
                    side: Side::Left,
                    from: type_name::<L>(),
                    to: type_name::<L2>(),
                }),
            },
            Either::Right(r) => match r.try_into() {
                Ok(narrowed) => Ok(Either::Right(narrowed)),
                Err(_) => Err(CastError {
                    side: Side::Right,
                    from: type_name::<R>(),
                    to: type_name::<R2>(),
                }),
            },
        }
    }

    /// Erases the Left type behind `dyn Any` for later downcasting.
    pub fn erase_left(self) -> Either<Box<dyn Any>, R>
    where
        L: Any,
    {
        match self {
            Either::Left(l) => Either::Left(Box::new(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Erases the Right type behind `dyn Any` for later downcasting.
    pub fn erase_right(self) -> Either<L, Box<dyn Any>>
    where
        R: Any,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(Box::new(r)),
        }
    }

    /// Erases both sides.
    pub fn erase(self) -> Either<Box<dyn Any>, Box<dyn Any>>
    where
        L: Any,
        R: Any,
    {
        match self {
            Either::Left(l) => Either::Left(Box::new(l)),
            Either::Right(r) => Either::Right(Box::new(r)),
        }
    }
}

fn bad_downcast<T>(side: Side) -> CastError {
    CastError {
        side,
        from: "dyn Any",
        to: type_name::<T>(),
    }
}

impl<R> Either<Box<dyn Any>, R> {
    /// Recovers a concrete Left type from an erased one.
    ///
    /// Fails with [`CastError`] iff the Left side is active and its runtime
    /// type is not `T`; an inactive Left is never checked.
    pub fn downcast_left<T: Any>(self) -> Result<Either<T, R>, CastError> {
        match self {
            Either::Left(boxed) => match boxed.downcast::<T>() {
                Ok(t) => Ok(Either::Left(*t)),
                Err(_) => Err(bad_downcast::<T>(Side::Left)),
            },
            Either::Right(r) => Ok(Either::Right(r)),
        }
    }
}

impl<L> Either<L, Box<dyn Any>> {
    /// Recovers a concrete Right type from an erased one.
    pub fn downcast_right<T: Any>(self) -> Result<Either<L, T>, CastError> {
        match self {
            Either::Left(l) => Ok(Either::Left(l)),
            Either::Right(boxed) => match boxed.downcast::<T>() {
                Ok(t) => Ok(Either::Right(*t)),
                Err(_) => Err(bad_downcast::<T>(Side::Right)),
            },
        }
    }
}

impl Either<Box<dyn Any>, Box<dyn Any>> {
    /// Recovers both concrete types from a fully erased value. Only the
    /// active side's runtime type is checked.
    pub fn downcast<T: Any, U: Any>(self) -> Result<Either<T, U>, CastError> {
        match self {
            Either::Left(boxed) => boxed
                .downcast::<T>()
                .map(|t| Either::Left(*t))
                .map_err(|_| bad_downcast::<T>(Side::Left)),
            Either::Right(boxed) => boxed
                .downcast::<U>()
                .map(|u| Either::Right(*u))
                .map_err(|_| bad_downcast::<U>(Side::Right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_then_narrow_round_trips() {
        let e: Either<i32, String> = Either::new_left(4);
        let wide: Either<i64, String> = e.widen_left();
        assert_eq!(wide, Either::new_left(4_i64));
        let back: Either<i32, String> = wide.narrow_left().unwrap();
        assert_eq!(back, Either::new_left(4));
    }

    #[test]
    fn narrow_fails_when_the_value_does_not_fit() {
        let e: Either<i64, String> = Either::new_left(300);
        let err = e.narrow_left::<u8>().unwrap_err();
        assert_eq!(err.side, Side::Left);
        assert_eq!(err.from, "i64");
        assert_eq!(err.to, "u8");
    }

    #[test]
    fn narrowing_never_checks_the_inactive_side() {
        // Left holds a value u8 cannot represent, but Right is active.
        let e: Either<i64, String> = Either::new_right("kept".into());
        let narrowed: Either<u8, String> = e.narrow_left().unwrap();
        assert_eq!(narrowed.try_right().map(String::as_str), Some("kept"));
    }

    #[test]
    fn narrow_both_checks_only_the_active_side() {
        let e: Either<i64, i64> = Either::new_right(5);
        let narrowed: Either<u8, u16> = e.narrow().unwrap();
        assert_eq!(narrowed, Either::new_right(5_u16));

        let e: Either<i64, i64> = Either::new_left(-1);
        assert!(e.narrow::<u8, u16>().is_err());
    }

    #[test]
    fn erase_and_downcast_round_trips() {
        let e: Either<i32, String> = Either::new_left(4);
        let erased = e.erase_left();
        let back: Either<i32, String> = erased.downcast_left().unwrap();
        assert_eq!(back, Either::new_left(4));
    }

    #[test]
    fn downcast_to_the_wrong_type_fails() {
        let e: Either<i32, String> = Either::new_left(4);
        let err = e.erase_left().downcast_left::<String>().unwrap_err();
        assert_eq!(err.side, Side::Left);
        assert!(err.to.contains("String"));
    }

    #[test]
    fn fully_erased_round_trip() {
        let e: Either<i32, String> = Either::new_right("hi".into());
        let back: Either<i32, String> = e.erase().downcast().unwrap();
        assert_eq!(back, Either::new_right("hi".into()));

        let e: Either<i32, String> = Either::new_right("hi".into());
        assert!(e.erase().downcast::<i32, u64>().is_err());
    }
}
