//! Answer-order shuffling
//!
//! Options are shuffled server-side before questions go out, so clients
//! cannot fingerprint the correct slot.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle answer options in place
pub fn shuffle_options<T>(options: &mut [T], rng: &mut impl Rng) {
    options.shuffle(rng);
}

/// Produce a shuffled index order for `len` options
///
/// Lets the caller remap the stored correct-answer index after shuffling.
pub fn shuffled_order(len: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}
