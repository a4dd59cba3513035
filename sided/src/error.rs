//! Error types for side access and narrowing casts.

use std::fmt;

use thiserror::Error;

/// Which alternative of an [`Either`](crate::Either) an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Returned when a side accessor is called on a value tagged with the other side.
///
/// Signals a programmer error (the tag was not checked first); there is nothing
/// to retry, the error should propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("accessed the {requested} side of a value tagged {actual}")]
pub struct SideError {
    /// The side the caller asked for.
    pub requested: Side,
    /// The side the value actually holds.
    pub actual: Side,
}

impl SideError {
    pub(crate) fn new(requested: Side) -> Self {
        SideError {
            requested,
            actual: requested.opposite(),
        }
    }
}

/// Returned when a narrowing cast fails because the active value does not
/// convert to (or is not an instance of) the requested target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot narrow the {side} side: {from} is not a {to}")]
pub struct CastError {
    /// The side whose value failed the cast.
    pub side: Side,
    /// Name of the source type.
    pub from: &'static str,
    /// Name of the requested target type.
    pub to: &'static str,
}
