use {
    crate::mode::strategy::state_strategy,
    proptest::{collection::vec, prelude::Strategy},
};

const MAX_MODES: usize = 4;
const MAX_DIM: usize = 3;

/// Guard thresholds for a system with between `min_modes` and `MAX_MODES` modes.
pub(crate) fn thresholds_strategy(min_modes: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (min_modes..=MAX_MODES).prop_flat_map(|n| vec(vec(-3.0..3.0f64, n), n))
}

/// A dimension (at least 1, so guards can read `x[0]`) with a state of that dimension.
pub(crate) fn sized_state_strategy() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (1..=MAX_DIM).prop_flat_map(|d| (proptest::strategy::Just(d), state_strategy(d)))
}
