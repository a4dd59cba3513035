//! The two-variant tagged value itself.

use std::any::Any;

use crate::classify::{self, Defaultness, Strategy};
use crate::error::{Side, SideError};

/// A value holding exactly one of two typed alternatives.
///
/// Left is the ordinary/empty channel and Right the extraordinary/present
/// one: a defaulted `Either` always lands on Left, and only a Left value
/// can ever count as [default](Either::is_default). This asymmetry is
/// deliberate and runs through equality, preconditions, and the whole
/// combinator surface.
///
/// ```rust
/// use sided::Either;
///
/// let e: Either<i32, String> = Either::new_right("hi".to_string());
/// let shown = e.fold(|n| n.to_string(), |s| s);
/// assert_eq!(shown, "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps a value on the Left side.
    pub fn new_left(value: L) -> Self {
        Either::Left(value)
    }

    /// Wraps a value on the Right side.
    pub fn new_right(value: R) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The tag as a [`Side`].
    pub fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    /// Extracts the Left value, or fails with a [`SideError`] when the
    /// value is tagged Right.
    pub fn left(self) -> Result<L, SideError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(SideError::new(Side::Left)),
        }
    }

    /// Extracts the Right value, or fails with a [`SideError`] when the
    /// value is tagged Left.
    pub fn right(self) -> Result<R, SideError> {
        match self {
            Either::Left(_) => Err(SideError::new(Side::Right)),
            Either::Right(r) => Ok(r),
        }
    }

    /// The Left value, if that side is active. Total.
    pub fn try_left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The Right value, if that side is active. Total.
    pub fn try_right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Exhaustive one-call deconstruction: reads the tag once and returns
    /// both slots partitioned by it. Exactly one of the two is `Some`.
    pub fn split(self) -> (Option<L>, Option<R>) {
        match self {
            Either::Left(l) => (Some(l), None),
            Either::Right(r) => (None, Some(r)),
        }
    }

    /// Borrows the active side without consuming the value.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Whichever side is active, erased for generic introspection.
    pub fn value(&self) -> &dyn Any
    where
        L: Any,
        R: Any,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => r,
        }
    }

    /// True iff the *active* side's value is itself absent.
    ///
    /// Distinct from [`is_default`](Either::is_default): a Right wrapping
    /// `None` wraps null but is never default.
    pub fn wraps_null(&self) -> bool
    where
        L: Defaultness,
        R: Defaultness,
    {
        match self {
            Either::Left(l) => l.is_absent(),
            Either::Right(r) => r.is_absent(),
        }
    }

    /// True iff the tag is Left and the Left value is the default of its
    /// type per [classification](crate::classify). A Right value is never
    /// default, even when its payload is itself empty or absent.
    pub fn is_default(&self) -> bool
    where
        L: Defaultness + 'static,
    {
        match self {
            Either::Left(l) => classify::is_default(l),
            Either::Right(_) => false,
        }
    }

    pub(crate) fn assert_not_default(&self, op: &str)
    where
        L: Defaultness + 'static,
    {
        assert!(
            !self.is_default(),
            "{op} called on a default Either (the left side holds the default value of its type)"
        );
    }

    /// Exchanges the sides. O(1), never inspects the values, involutive.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Applies the function matching the active side; the other function
    /// is never invoked.
    ///
    /// # Panics
    ///
    /// Panics when called on a [default](Either::is_default) value: a
    /// default instance represents "neither side explicitly chosen" and
    /// folding it is a contract violation.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("fold");
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Equality with caller-supplied comparers, one per side. Values on
    /// different sides are never equal regardless of their contents.
    pub fn eq_with<L2, R2>(
        &self,
        other: &Either<L2, R2>,
        l_eq: impl FnOnce(&L, &L2) -> bool,
        r_eq: impl FnOnce(&R, &R2) -> bool,
    ) -> bool {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => l_eq(a, b),
            (Either::Right(a), Either::Right(b)) => r_eq(a, b),
            _ => false,
        }
    }
}

/// The default instance lands on the deterministic side: Left.
impl<L: Default, R> Default for Either<L, R> {
    fn default() -> Self {
        Either::Left(L::default())
    }
}

/// Nested `Either`s classify by delegation.
impl<L: Defaultness + 'static, R> Defaultness for Either<L, R> {
    const STRATEGY: Strategy = Strategy::Delegate;

    fn is_default_value(&self) -> bool {
        self.is_default()
    }
}
