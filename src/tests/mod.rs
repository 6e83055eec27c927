use crate::*;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

mod heap_test;
mod size_test;
mod iter;

pub(crate) fn shuffled(size: usize, seed: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (1..=size as u64).collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

/// Calls `f` with every permutation of `values` (Heap's algorithm).
pub(crate) fn for_each_permutation<T, F: FnMut(&[T])>(values: &mut [T], mut f: F) {
    let n = values.len();
    let mut c = vec![0usize; n];
    f(values);
    let mut i = 0;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                values.swap(0, i);
            } else {
                values.swap(c[i], i);
            }
            f(values);
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
}

#[test]
fn permutation_count() {
    let mut values = [1, 2, 3, 4];
    let mut seen = Vec::new();
    for_each_permutation(&mut values, |p| seen.push(p.to_vec()));
    assert_eq!(seen.len(), 24);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 24);
}
