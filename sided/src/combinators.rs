//! Per-side and dual transformations, filters, and iteration.
//!
//! Everything here is expressed on [`Either`]'s public contract. Left-only
//! and dual forms share [`fold`](Either::fold)'s precondition: the value
//! must not be [default](Either::is_default). Right-only forms carry no
//! precondition, since a Right value is never default.

use crate::classify::Defaultness;
use crate::either::Either;

impl<L, R> Either<L, R> {
    /// Transforms the Left value, passing a Right through unchanged.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R>
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("map_left");
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transforms the Right value, passing a Left through unchanged.
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms whichever side is active.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn map<T, U>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> U) -> Either<T, U>
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("map");
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Flat-maps the Left value; the transformation may change sides.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn and_then_left<T>(self, f: impl FnOnce(L) -> Either<T, R>) -> Either<T, R>
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("and_then_left");
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Flat-maps the Right value; the transformation may change sides.
    pub fn and_then_right<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Flat-maps whichever side is active.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn and_then<T, U>(
        self,
        on_left: impl FnOnce(L) -> Either<T, U>,
        on_right: impl FnOnce(R) -> Either<T, U>,
    ) -> Either<T, U>
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("and_then");
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Zero-or-one Left values matching `pred`. Restartable: each call
    /// builds a fresh iterator.
    pub fn filter_left(&self, pred: impl FnOnce(&L) -> bool) -> impl Iterator<Item = &L> {
        self.try_left().filter(|l| pred(l)).into_iter()
    }

    /// Zero-or-one Right values matching `pred`.
    pub fn filter_right(&self, pred: impl FnOnce(&R) -> bool) -> impl Iterator<Item = &R> {
        self.try_right().filter(|r| pred(r)).into_iter()
    }

    /// Keeps an active Left that matches `pred`; a non-matching Left is
    /// replaced by `fallback` on the Right. A Right passes through and
    /// `fallback` is dropped unused.
    pub fn where_left_or(self, pred: impl FnOnce(&L) -> bool, fallback: R) -> Either<L, R> {
        self.where_left_or_else(pred, || fallback)
    }

    /// Lazy form of [`where_left_or`](Either::where_left_or): the fallback
    /// is computed only when needed.
    pub fn where_left_or_else(
        self,
        pred: impl FnOnce(&L) -> bool,
        fallback: impl FnOnce() -> R,
    ) -> Either<L, R> {
        match self {
            Either::Left(l) if pred(&l) => Either::Left(l),
            Either::Left(_) => Either::Right(fallback()),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Keeps an active Right that matches `pred`; a non-matching Right is
    /// replaced by `fallback` on the Left.
    pub fn where_right_or(self, pred: impl FnOnce(&R) -> bool, fallback: L) -> Either<L, R> {
        self.where_right_or_else(pred, || fallback)
    }

    /// Lazy form of [`where_right_or`](Either::where_right_or).
    pub fn where_right_or_else(
        self,
        pred: impl FnOnce(&R) -> bool,
        fallback: impl FnOnce() -> L,
    ) -> Either<L, R> {
        match self {
            Either::Right(r) if pred(&r) => Either::Right(r),
            Either::Right(_) => Either::Left(fallback()),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// A one-element iterator over the active side, tagged.
    pub fn iter(&self) -> impl Iterator<Item = Either<&L, &R>> {
        std::iter::once(self.as_ref())
    }

    /// Zero-or-one Left values, consistent with the tag.
    pub fn iter_left(&self) -> impl Iterator<Item = &L> {
        self.try_left().into_iter()
    }

    /// Zero-or-one Right values, consistent with the tag.
    pub fn iter_right(&self) -> impl Iterator<Item = &R> {
        self.try_right().into_iter()
    }

    /// True iff the Left side is active and its value matches `pred`.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn left_matches(&self, pred: impl FnOnce(&L) -> bool) -> bool
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("left_matches");
        self.try_left().map_or(false, pred)
    }

    /// True iff the Right side is active and its value matches `pred`.
    pub fn right_matches(&self, pred: impl FnOnce(&R) -> bool) -> bool {
        self.try_right().map_or(false, pred)
    }

    /// Tests the active side against the matching predicate.
    ///
    /// # Panics
    ///
    /// Panics when called on a default value.
    pub fn matches(&self, on_left: impl FnOnce(&L) -> bool, on_right: impl FnOnce(&R) -> bool) -> bool
    where
        L: Defaultness + 'static,
    {
        self.assert_not_default("matches");
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}
