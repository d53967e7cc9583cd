//! Contract checks shared by every container variant.

use tombola_core::error::TombolaError;
use tombola_core::tombola::Tombola;

fn drain<C: Tombola<i32> + ?Sized>(tombola: &mut C) -> Vec<i32> {
    let mut picked = Vec::new();
    while let Ok(item) = tombola.pick() {
        picked.push(item);
    }
    picked.sort_unstable();
    picked
}

/// Runs the load/pick/loaded/inspect contract against an empty container.
///
/// # Panics
///
/// Panics with a description of the first violated property. The container
/// is left empty on success.
pub fn assert_tombola_contract<C: Tombola<i32> + ?Sized>(tombola: &mut C) {
    // Fresh container.
    assert_eq!(tombola.pick(), Err(TombolaError::EmptyContainer));
    assert!(!tombola.loaded(), "fresh container reports loaded");
    assert_eq!(tombola.inspect(), Ok(Vec::new()));
    assert_eq!(
        tombola.pick(),
        Err(TombolaError::EmptyContainer),
        "failed pick or inspect mutated an empty container"
    );

    // Empty load is a no-op.
    tombola.load(Vec::new());
    assert!(!tombola.loaded(), "empty load made container loaded");

    // Inspect is sorted, idempotent and non-destructive.
    tombola.load(vec![3, 1, 2]);
    assert!(tombola.loaded());
    assert_eq!(tombola.inspect(), Ok(vec![1, 2, 3]));
    assert_eq!(tombola.inspect(), Ok(vec![1, 2, 3]), "inspect not idempotent");
    assert!(tombola.loaded(), "inspect drained the container");
    assert_eq!(drain(tombola), vec![1, 2, 3]);
    assert!(!tombola.loaded(), "container still loaded after full drain");
    assert_eq!(tombola.pick(), Err(TombolaError::EmptyContainer));

    // Loads accumulate and keep duplicates.
    tombola.load(vec![5, 5]);
    tombola.load(vec![1]);
    assert_eq!(tombola.inspect(), Ok(vec![1, 5, 5]));
    assert_eq!(drain(tombola), vec![1, 5, 5]);

    // Exactly len(xs) successful picks.
    let xs: Vec<i32> = (0..64).map(|i| (i * 37) % 11).collect();
    let mut expected = xs.clone();
    expected.sort_unstable();
    tombola.load(xs);
    let mut picked = Vec::new();
    for _ in 0..expected.len() {
        match tombola.pick() {
            Ok(item) => picked.push(item),
            Err(err) => panic!("pick failed before container was drained: {err}"),
        }
    }
    picked.sort_unstable();
    assert_eq!(picked, expected);
    assert!(!tombola.loaded());
}

/// Loads `[0, 0, 0, 1]` `trials` times, picks once per round, and checks
/// that `1` comes out roughly a quarter of the time.
///
/// # Panics
///
/// Panics if the observed frequency of `1` falls outside `[0.2, 0.3]`, or
/// if the container is not empty on entry.
pub fn assert_pick_frequency<C: Tombola<i32> + ?Sized>(tombola: &mut C, trials: u32) {
    assert!(!tombola.loaded(), "frequency check needs an empty container");

    let mut hits = 0_u32;
    for _ in 0..trials {
        tombola.load(vec![0, 0, 0, 1]);
        if tombola.pick() == Ok(1) {
            hits += 1;
        }
        drain(tombola);
    }

    let frequency = f64::from(hits) / f64::from(trials);
    assert!(
        (0.2..=0.3).contains(&frequency),
        "picked 1 with frequency {frequency}, expected about 0.25"
    );
}
