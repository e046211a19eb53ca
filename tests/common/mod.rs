//! Generators shared by the integration tests.

use std::collections::BTreeSet;

use rand::Rng;

/// `size` random indices drawn from `[0, bound)`, duplicates allowed.
pub fn generate_int_array(size: usize, bound: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

/// Sorted, deduplicated positions of `values`.
pub fn unique(values: &[i64]) -> Vec<usize> {
    values
        .iter()
        .map(|&v| v as usize)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
