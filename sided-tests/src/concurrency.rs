//! Racing first classifications of a novel type must agree.

use std::sync::Barrier;
use std::thread;

use sided::{classified_count, classify, never_default, Strategy};

struct RaceProbe;
never_default!(RaceProbe);

#[test]
fn racing_first_classifications_agree() {
    const THREADS: usize = 16;

    let barrier = Barrier::new(THREADS);
    let observed: Vec<Strategy> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    classify::<RaceProbe>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(observed.len(), THREADS);
    assert!(observed.iter().all(|s| *s == Strategy::NeverDefault));
    assert!(classified_count() >= 1);
    // Later calls keep observing the published outcome.
    assert_eq!(classify::<RaceProbe>(), Strategy::NeverDefault);
}
