//! Two-variant tagged values with per-type defaultness classification.
//!
//! [`Either<L, R>`](Either) holds exactly one of two typed alternatives.
//! Left is the ordinary/empty channel and Right the extraordinary/present
//! one: a defaulted `Either` lands on Left, and only a Left value can make
//! the whole thing count as [default](Either::is_default).
//!
//! What "default" means for the wrapped value is decided per type by the
//! [`classify`] module: `Option`s are default when absent, a
//! [`FrozenSlice`] when never allocated, opted-in types answer for
//! themselves via [`Defaultness`], and everything else — including a zero
//! integer — is never default.
//!
//! ```rust
//! use sided::Either;
//!
//! let e: Either<i32, String> = Either::new_left(4);
//! assert_eq!(e.try_left(), Some(&4));
//!
//! let e: Either<i32, String> = Either::new_right("hi".to_string());
//! assert_eq!(e.fold(|i| i.to_string(), |s| s), "hi");
//! ```
//!
//! The casting surface widens an `Either` over convertible types without a
//! runtime check and narrows it back with one, in both a conversion-trait
//! flavor (`widen_left`, `narrow_left`) and a `dyn Any` flavor
//! (`erase_left`, `downcast_left`).

mod cast;
pub mod classify;
mod combinators;
mod either;
mod error;
mod frozen;

pub use classify::{classified_count, classify, is_default, Defaultness, Strategy};
pub use either::Either;
pub use error::{CastError, Side, SideError};
pub use frozen::FrozenSlice;
