use approx::assert_abs_diff_eq;
use rand::{SeedableRng, rngs::StdRng};

use crate::{Annealer, Bounds, Maximize, Objective, Run, callback::Progress};

use super::{CubicPeak, SAMPLES, SlopeFit};

fn solve_cubic(seed: u64, initial_x: f64) -> Run {
    let bounds = Bounds::new(-15.0, 15.0).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    Annealer::default()
        .solve(&CubicPeak, 100, 0.99, initial_x, bounds, &mut rng)
        .unwrap()
}

#[test]
fn test_cubic_peak() {
    for seed in 0..3 {
        let run = solve_cubic(seed, 0.0);
        assert_abs_diff_eq!(-2.0, run.best_x, epsilon = 0.7);
        assert_abs_diff_eq!(186.0, run.best_quality.into_inner(), epsilon = 10.0);
    }
}

#[test]
fn test_slope_fit_approaches_closed_form() {
    let bounds = Bounds::new(2000.0, 5000.0).unwrap();
    let sum_xy: f64 = SAMPLES.iter().map(|&(x, y)| x * y).sum();
    let sum_xx: f64 = SAMPLES.iter().map(|&(x, _)| x * x).sum();
    let closed_form = sum_xy / sum_xx;
    assert!(bounds.contains(closed_form));

    let mut rng = StdRng::seed_from_u64(7);
    let run = Annealer::default()
        .solve(&SlopeFit, 100, 0.99, 2000.0, bounds, &mut rng)
        .unwrap();
    assert_abs_diff_eq!(closed_form, run.best_x, epsilon = 100.0);
}

#[test]
fn test_history_and_result_stay_in_bounds() {
    let bounds = Bounds::new(-15.0, 15.0).unwrap();
    let run = solve_cubic(11, 14.0);
    assert!(bounds.contains(run.best_x));
    assert!(bounds.contains(run.final_x));
    assert!(run.history.iter().all(|&x| bounds.contains(x)));
}

#[test]
fn test_initial_x_outside_bounds_is_clamped() {
    let run = solve_cubic(11, 1000.0);
    let bounds = Bounds::new(-15.0, 15.0).unwrap();
    assert!(bounds.contains(run.best_x));
    assert!(run.history.iter().all(|&x| bounds.contains(x)));
}

#[test]
fn test_result_no_worse_than_initial() {
    for seed in [0, 5, 9] {
        let initial_x = 10.0;
        let run = solve_cubic(seed, initial_x);
        let initial_quality = CubicPeak.evaluate(initial_x);
        assert!(!CubicPeak.prefers(initial_quality, run.best_quality.into_inner()));
    }
}

#[test]
fn test_identical_seeds_identical_runs() {
    let a = solve_cubic(42, 1.0);
    let b = solve_cubic(42, 1.0);
    assert_eq!(a.best_x, b.best_x);
    assert_eq!(a.best_quality, b.best_quality);
    assert_eq!(a.accepted, b.accepted);
    assert_eq!(a.history.as_slice(), b.history.as_slice());

    let c = solve_cubic(43, 1.0);
    assert_ne!(a.history.as_slice(), c.history.as_slice());
}

#[test]
fn test_best_matches_history_scan() {
    let initial_x = 0.0;
    let run = solve_cubic(3, initial_x);

    let mut best_x = initial_x;
    let mut best_quality = CubicPeak.evaluate(initial_x);
    for &x in run.history.iter() {
        let quality = CubicPeak.evaluate(x);
        if CubicPeak.prefers(quality, best_quality) {
            best_x = x;
            best_quality = quality;
        }
    }
    assert_eq!(best_x, run.best_x);
    assert_eq!(best_quality, run.best_quality.into_inner());
}

#[test]
fn test_degenerate_bounds_return_the_point() {
    let bounds = Bounds::new(3.0, 3.0).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let run = Annealer::new(50.0, 10)
        .unwrap()
        .solve(&CubicPeak, 20, 0.9, -7.0, bounds, &mut rng)
        .unwrap();
    assert_eq!(run.best_x, 3.0);
    assert_eq!(run.final_x, 3.0);
    assert!(run.history.iter().all(|&x| x == 3.0));
}

#[test]
fn test_equal_qualities_always_accepted() {
    // flat objective: nothing is ever strictly preferred, so every proposal
    // goes through the probabilistic branch with exp(0) = 1
    let flat = Maximize(|_: f64| 42.0);
    let bounds = Bounds::new(0.0, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let run = Annealer::new(1.0, 5)
        .unwrap()
        .solve(&flat, 20, 0.5, 0.5, bounds, &mut rng)
        .unwrap();
    assert_eq!(run.accepted, 100);
    assert_eq!(run.history.len(), 100);
}

#[test]
fn test_callback_fires_once_per_level() {
    let bounds = Bounds::new(-15.0, 15.0).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let mut temperatures = Vec::new();
    let mut callback = |p: Progress| temperatures.push(p.temperature);
    Annealer::new(80.0, 12)
        .unwrap()
        .solve_with(&CubicPeak, 10, 0.9, 0.0, bounds, &mut rng, &mut callback)
        .unwrap();

    assert_eq!(temperatures.len(), 12);
    assert_abs_diff_eq!(80.0, temperatures[0]);
    for w in temperatures.windows(2) {
        assert_abs_diff_eq!(0.9, w[1] / w[0], epsilon = 1e-12);
    }
}

#[test]
fn test_final_temperature_follows_schedule() {
    let run = solve_cubic(0, 0.0);
    let expected = 100.0 * 0.99f64.powi(100);
    assert_abs_diff_eq!(expected, run.final_temperature, epsilon = 1e-9);
}

#[test]
fn test_custom_step_fraction() {
    let bounds = Bounds::new(-15.0, 15.0).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let run = Annealer::default()
        .with_step_fraction(0.02)
        .unwrap()
        .solve(&CubicPeak, 100, 0.99, 0.0, bounds, &mut rng)
        .unwrap();
    assert_abs_diff_eq!(-2.0, run.best_x, epsilon = 0.7);
}
