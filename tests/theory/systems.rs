// Systems whose guards are thresholds on the first coordinate, so that which guards hold is
// easy to control from a test.

use hybrid_systems::prelude::*;

/// Fires when `x[0] > c`, and adds `by` to every coordinate.
pub fn threshold(name: &str, c: f64, by: f64) -> Reset {
    Reset::new(
        name,
        move |x: &[f64]| x[0] > c,
        move |x: &[f64]| x.iter().map(|v| v + by).collect(),
    )
}

pub fn always(name: &str) -> Reset {
    Reset::new(name, |_: &[f64]| true, |x: &[f64]| x.to_vec())
}

pub fn constant_field(name: &str, dim: usize, v: f64) -> Mode {
    Mode::new(name, dim, move |_: &[f64]| vec![v; dim])
}

/// `n` stationary modes of dimension `dim`, with the reset `i → j` firing when
/// `x[0] > thresholds[i][j]` and adding `10 * i + j` to the state.
pub fn threshold_system(dim: usize, thresholds: &[Vec<f64>]) -> HybSys {
    let n = thresholds.len();
    let modes = vec![Mode::stationary(dim); n];
    let resets = thresholds
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &c)| threshold(&format!("r{i}{j}"), c, (10 * i + j) as f64))
                .collect()
        })
        .collect();
    HybSys::new(modes, resets).expect("square by construction")
}

/// A chain `0 → 1 → ... → n-1` of 1-dimensional modes, each step firing when `x[0] > i`.
pub fn chain(n: usize) -> HybSys {
    let modes = (0..n)
        .map(|i| constant_field(&format!("m{i}"), 1, i as f64))
        .collect();
    let resets = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if j == i + 1 {
                        threshold(&format!("r{i}{j}"), i as f64, 0.0)
                    } else {
                        Reset::never()
                    }
                })
                .collect()
        })
        .collect();
    HybSys::new(modes, resets).expect("square by construction")
}
