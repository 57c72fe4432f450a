#![cfg(feature = "heavy")]
use countdown_dp::strategies::{Bfs, BottomUp};
use countdown_dp::validate::is_valid;
use countdown_dp::PathSolver;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_random_large_values() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..8 {
        let n = rng.gen_range(1_000_000u64..5_000_000);
        let dp = BottomUp.solve(n).unwrap();
        let bfs = Bfs.solve(n).unwrap();
        assert_eq!(dp.steps, bfs.steps, "n={n}");
        assert!(is_valid(n, &dp.operations));
        assert!(is_valid(n, &bfs.operations));
        // log_3(n) lower bound, decrement chain upper bound
        assert!(dp.steps as f64 >= (n as f64).log(3.0).floor());
    }
}
