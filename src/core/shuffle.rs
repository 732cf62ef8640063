//! Order-Randomizing Permutations
//!
//! Fisher-Yates (Durstenfeld) shuffles that operate on a copy: the input
//! sequence is never mutated. The seeded variant draws from [`SeededRng`],
//! so the same seed and input produce the same ordering on every platform.

use rand::Rng;

use super::rng::SeededRng;

/// Shuffle a sequence using the ambient thread-local random source.
///
/// Returns a new vector; the input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = rand::thread_rng();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Deterministically shuffle a sequence using a string seed.
///
/// Same seed + same input = byte-identical ordering, every call.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut rng = SeededRng::from_seed(seed);
    shuffle_with(items, &mut rng)
}

/// Shuffle a sequence drawing indices from an existing seeded stream.
pub fn shuffle_with<T: Clone>(items: &[T], rng: &mut SeededRng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_below(i + 1);
        out.swap(i, j);
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
