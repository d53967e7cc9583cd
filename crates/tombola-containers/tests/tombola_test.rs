//! Integration tests driving every variant through `dyn Tombola`.

use tombola_containers::{ContainerKind, SharedTombola};
use tombola_core::error::TombolaError;
use tombola_core::rng::StdRandom;
use tombola_core::tombola::Tombola;

fn every_kind(seed: u64) -> Vec<(ContainerKind, Box<dyn Tombola<i32> + Send>)> {
    ContainerKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.build(Box::new(StdRandom::seeded(seed)))))
        .collect()
}

#[test]
fn test_fresh_container_pick_fails() {
    for (kind, mut container) in every_kind(1) {
        assert_eq!(
            container.pick(),
            Err(TombolaError::EmptyContainer),
            "{kind} picked from a fresh container"
        );
        assert!(!container.loaded(), "{kind} reports loaded when fresh");
    }
}

#[test]
fn test_load_inspect_then_drain() {
    for (kind, mut container) in every_kind(2) {
        container.load(vec![3, 1, 2]);
        assert_eq!(container.inspect(), Ok(vec![1, 2, 3]), "{kind}");
        assert!(container.loaded(), "{kind} drained by inspect");

        let mut drained = Vec::new();
        while let Ok(item) = container.pick() {
            drained.push(item);
        }
        drained.sort_unstable();
        assert_eq!(drained, vec![1, 2, 3], "{kind}");
        assert!(!container.loaded());
    }
}

#[test]
fn test_inspect_is_idempotent_with_duplicates() {
    for (kind, mut container) in every_kind(3) {
        container.load(vec![4, 4, 0, 9, 4]);
        let first = container.inspect();
        let second = container.inspect();
        assert_eq!(first, Ok(vec![0, 4, 4, 4, 9]), "{kind}");
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn test_inspect_nan_fails_without_losing_items() {
    for kind in ContainerKind::ALL {
        let mut container = kind.build::<f64>(Box::new(StdRandom::seeded(4)));
        container.load(vec![2.0, f64::NAN, -1.0]);

        assert_eq!(
            container.inspect(),
            Err(TombolaError::ItemsNotComparable),
            "{kind}"
        );

        let mut count = 0;
        while container.pick().is_ok() {
            count += 1;
        }
        assert_eq!(count, 3, "{kind} lost items on failed inspect");
    }
}

#[test]
fn test_single_odd_item_frequency() {
    const TRIALS: u32 = 4000;

    for (kind, mut container) in every_kind(5) {
        let mut b_count = 0_u32;
        for _ in 0..TRIALS {
            container.load(vec![0, 0, 0, 1]);
            if container.pick() == Ok(1) {
                b_count += 1;
            }
            while container.pick().is_ok() {}
        }
        let frequency = f64::from(b_count) / f64::from(TRIALS);
        assert!(
            (frequency - 0.25).abs() < 0.05,
            "{kind} picked the odd item with frequency {frequency}"
        );
    }
}

#[test]
fn test_shared_wrapper_over_built_container() {
    let built = ContainerKind::Lottery.build::<&'static str>(Box::new(StdRandom::seeded(6)));
    let mut shared = SharedTombola::from_boxed(built);
    shared.load(vec!["pear", "apple", "fig"]);

    assert_eq!(shared.inspect(), Ok(vec!["apple", "fig", "pear"]));
    assert!(shared.loaded());
}
