use countdown_dp::strategies::{Bfs, BottomUp, Memoized, Recursive};
use countdown_dp::StepCounter;
use proptest::prelude::*;

/// Full-table reference written independently of the crate.
fn full_table(n: u64) -> Vec<u64> {
    let n = n as usize;
    let mut f = vec![0u64; n + 1];
    for x in 2..=n {
        let mut best = f[x - 1] + 1;
        if x % 2 == 0 {
            best = best.min(f[x / 2] + 1);
        }
        if x % 3 == 0 {
            best = best.min(f[x / 3] + 1);
        }
        f[x] = best;
    }
    f
}

#[test]
fn all_strategies_agree_up_to_twenty() {
    let reference = full_table(20);
    for n in 1..=20u64 {
        let expected = reference[n as usize];
        assert_eq!(Recursive::new().min_steps(n), Ok(expected), "recursive n={n}");
        assert_eq!(Memoized::new().min_steps(n), Ok(expected), "memoized n={n}");
        assert_eq!(BottomUp.min_steps(n), Ok(expected), "bottom-up n={n}");
        assert_eq!(Bfs.min_steps(n), Ok(expected), "bfs n={n}");
    }
}

#[test]
fn monotone_sanity_bound() {
    let table = BottomUp.table(5_000).unwrap();
    for n in 2..=5_000u64 {
        let here = table.steps(n).unwrap();
        let below = table.steps(n - 1).unwrap();
        assert!(here <= below + 1, "count({n}) = {here} > count({}) + 1", n - 1);
    }
}

#[test]
fn table_matches_reference_everywhere() {
    let reference = full_table(3_000);
    let table = BottomUp.table(3_000).unwrap();
    for n in 1..=3_000u64 {
        assert_eq!(table.steps(n), Some(reference[n as usize]), "n={n}");
    }
}

proptest! {
    #[test]
    fn iterative_and_memoized_agree(n in 1u64..2_000) {
        let expected = full_table(n)[n as usize];
        prop_assert_eq!(Memoized::new().min_steps(n), Ok(expected));
        prop_assert_eq!(BottomUp.min_steps(n), Ok(expected));
        prop_assert_eq!(Bfs.min_steps(n), Ok(expected));
    }

    #[test]
    fn recursive_agrees_when_bounded(n in 1u64..=20) {
        prop_assert_eq!(Recursive::new().min_steps(n), BottomUp.min_steps(n));
    }
}
