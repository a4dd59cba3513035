//! Property tests over generated `Either` values.

use proptest::prelude::*;
use sided::Either;

fn arb_either() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::new_left),
        "[a-z]{0,8}".prop_map(Either::new_right),
    ]
}

proptest! {
    #[test]
    fn swap_is_an_involution(e in arb_either()) {
        prop_assert_eq!(e.clone().swap().swap(), e);
    }

    #[test]
    fn split_partitions_exactly_one_side(e in arb_either()) {
        let was_left = e.is_left();
        let (l, r) = e.split();
        prop_assert_eq!(l.is_some(), was_left);
        prop_assert_eq!(r.is_some(), !was_left);
    }

    #[test]
    fn widen_then_narrow_round_trips(e in arb_either()) {
        let wide: Either<i64, String> = e.clone().widen_left();
        let back: Either<i32, String> = wide.narrow_left().unwrap();
        prop_assert_eq!(back, e);
    }

    #[test]
    fn erase_then_downcast_round_trips(e in arb_either()) {
        let back: Either<i32, String> = e.clone().erase().downcast().unwrap();
        prop_assert_eq!(back, e);
    }

    #[test]
    fn eq_with_agrees_with_derived_equality(a in arb_either(), b in arb_either()) {
        let by_parts = a.eq_with(&b, |x, y| x == y, |x, y| x == y);
        prop_assert_eq!(by_parts, a == b);
    }

    #[test]
    fn fold_picks_the_active_side(e in arb_either()) {
        let folded = e.clone().fold(|n| n.to_string(), |s| s);
        match e {
            Either::Left(n) => prop_assert_eq!(folded, n.to_string()),
            Either::Right(s) => prop_assert_eq!(folded, s),
        }
    }

    #[test]
    fn map_right_never_disturbs_a_left(n in any::<i32>()) {
        let e: Either<i32, String> = Either::new_left(n);
        prop_assert_eq!(e.map_right(|s| s.len()), Either::new_left(n));
    }

    #[test]
    fn where_left_keeps_matching_values(n in any::<i32>()) {
        let e: Either<i32, String> = Either::new_left(n);
        let kept = e.clone().where_left_or(|v| *v == n, "replaced".into());
        prop_assert_eq!(kept, e);
    }
}
