//! Per-type selection of a default-detection strategy.
//!
//! Whether a value counts as "the default of its type" depends on what kind
//! of type it is: an `Option` is default when it is `None`, a
//! [`FrozenSlice`](crate::FrozenSlice) is default when it was never
//! allocated, a type can opt in and answer for itself, and every other
//! value type is simply never default — even at its zero value.
//!
//! The choice is made by the [`Defaultness`] trait, resolved at generic
//! instantiation time, and memoized per concrete type in a process-wide
//! table so the decision runs once for the lifetime of the process.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::trace;

/// How defaultness is tested for a given type. Exactly one strategy applies
/// to any type; classification never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The type has an absent state; default ⇔ the value is absent.
    NullTest,
    /// The type is a container that knows whether it was ever allocated;
    /// default ⇔ never allocated (distinct from allocated-but-empty).
    AskContainer,
    /// The type opted in and reports its own defaultness.
    Delegate,
    /// An ordinary value type: no value of it is ever default.
    NeverDefault,
}

/// Capability trait deciding how values of a type are tested for defaultness.
///
/// Most types never count as default, and the trait's defaults say exactly
/// that — opting a plain value type in is one empty impl, which the
/// [`never_default!`](crate::never_default) macro writes for you:
///
/// ```rust
/// use sided::{classify, never_default, Strategy};
///
/// #[derive(Default)]
/// struct Meters(f64);
/// never_default!(Meters);
///
/// assert_eq!(classify::<Meters>(), Strategy::NeverDefault);
/// ```
///
/// A type that can distinguish "never explicitly constructed" from an
/// ordinary value instead delegates:
///
/// ```rust
/// use sided::{is_default, Defaultness, Strategy};
///
/// struct Temperature {
///     celsius: f64,
///     set: bool,
/// }
///
/// impl Defaultness for Temperature {
///     const STRATEGY: Strategy = Strategy::Delegate;
///     fn is_default_value(&self) -> bool {
///         !self.set
///     }
/// }
///
/// assert!(is_default(&Temperature { celsius: 0.0, set: false }));
/// assert!(!is_default(&Temperature { celsius: 0.0, set: true }));
/// ```
pub trait Defaultness {
    /// The strategy used for values of this type.
    const STRATEGY: Strategy = Strategy::NeverDefault;

    /// Strategy-specific defaultness test. Never consulted when the
    /// strategy is [`Strategy::NeverDefault`].
    fn is_default_value(&self) -> bool {
        false
    }

    /// True only for types with an absent state, when the value is absent.
    /// Unlike [`is_default_value`](Self::is_default_value) this is a
    /// property of the value alone and ignores which side of an `Either`
    /// it sits on.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Defaultness for Option<T> {
    const STRATEGY: Strategy = Strategy::NullTest;

    fn is_default_value(&self) -> bool {
        self.is_none()
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Declares one or more ordinary value types as never default.
#[macro_export]
macro_rules! never_default {
    ($($t:ty),+ $(,)?) => {
        $(impl $crate::classify::Defaultness for $t {})+
    };
}

never_default!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    String,
);

impl<'a> Defaultness for &'a str {}

fn cache() -> &'static RwLock<HashMap<TypeId, Strategy>> {
    static CACHE: OnceLock<RwLock<HashMap<TypeId, Strategy>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the [`Strategy`] for `T`, memoized per concrete type.
///
/// The first call for a given `T` publishes the decision into a shared
/// table; every later call is a read-lock hit. Concurrent first calls are
/// safe and all observe the same outcome.
///
/// ```rust
/// use sided::{classify, FrozenSlice, Strategy};
///
/// assert_eq!(classify::<Option<u8>>(), Strategy::NullTest);
/// assert_eq!(classify::<FrozenSlice<String>>(), Strategy::AskContainer);
/// assert_eq!(classify::<i64>(), Strategy::NeverDefault);
/// ```
pub fn classify<T: Defaultness + 'static>() -> Strategy {
    let id = TypeId::of::<T>();
    if let Some(strategy) = cache().read().get(&id) {
        return *strategy;
    }
    let mut table = cache().write();
    *table.entry(id).or_insert_with(|| {
        trace!(ty = type_name::<T>(), strategy = ?T::STRATEGY, "classified type");
        T::STRATEGY
    })
}

/// Tests whether `value` is the default of its type, per its cached strategy.
pub fn is_default<T: Defaultness + 'static>(value: &T) -> bool {
    match classify::<T>() {
        Strategy::NeverDefault => false,
        Strategy::NullTest | Strategy::AskContainer | Strategy::Delegate => {
            value.is_default_value()
        }
    }
}

/// Number of distinct types classified so far in this process.
pub fn classified_count() -> usize {
    cache().read().len()
}
