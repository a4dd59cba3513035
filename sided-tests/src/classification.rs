//! Defaultness tables and concrete scenarios across the four strategies.

use sided::{classify, Either, FrozenSlice, Strategy};

use crate::samples::{Count, Reading};

#[test]
fn sample_types_classify_as_expected() {
    assert_eq!(classify::<Reading>(), Strategy::Delegate);
    assert_eq!(classify::<Count>(), Strategy::NeverDefault);
    assert_eq!(classify::<Option<Reading>>(), Strategy::NullTest);
    assert_eq!(classify::<FrozenSlice<Reading>>(), Strategy::AskContainer);
}

#[test]
fn nullable_left_table() {
    // Default instance: left side absent.
    assert!(Either::<Option<String>, String>::default().is_default());
    // Wrapping a present value: not default.
    assert!(!Either::<Option<String>, String>::new_left(Some("v".into())).is_default());
    // Any Right instance: never default, even wrapping an absent value.
    assert!(!Either::<Option<String>, Option<String>>::new_right(None).is_default());
    assert!(!Either::<Option<String>, String>::new_right("v".into()).is_default());
}

#[test]
fn delegate_left_table() {
    assert!(Either::<Reading, String>::default().is_default());
    assert!(!Either::<Reading, String>::new_left(Reading::taken(3.3)).is_default());
    assert!(!Either::<Reading, String>::new_right("v".into()).is_default());
}

#[test]
fn plain_value_left_is_never_default() {
    // Zero is an ordinary value, not a default marker.
    assert!(!Either::<i32, String>::default().is_default());
    assert!(!Either::<i32, String>::new_left(0).is_default());
    assert!(!Either::<Count, String>::default().is_default());
}

#[test]
fn container_left_table() {
    assert!(Either::<FrozenSlice<u8>, String>::default().is_default());
    let empty = FrozenSlice::<u8>::empty();
    assert!(!Either::<FrozenSlice<u8>, String>::new_left(empty).is_default());
    let full: FrozenSlice<u8> = vec![1, 2].into();
    assert!(!Either::<FrozenSlice<u8>, String>::new_left(full).is_default());
}

#[test]
fn wraps_null_diverges_from_is_default() {
    let right_null: Either<Option<i32>, Option<String>> = Either::new_right(None);
    assert!(right_null.wraps_null());
    assert!(!right_null.is_default());
}

#[test]
fn left_scenario() {
    let e: Either<i32, String> = Either::new_left(4);
    assert_eq!(e.try_left(), Some(&4));
    assert_eq!(e.try_right(), None);
    assert_eq!(e.split(), (Some(4), None));
}

#[test]
fn right_scenario() {
    let e: Either<i32, String> = Either::new_right("hi".to_string());
    assert_eq!(e.fold(|i| i.to_string(), |s| s), "hi");
}
