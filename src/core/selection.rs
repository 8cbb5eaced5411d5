/// Deterministic selection primitives: modulo picks and LCG-driven shuffles.

/// Multiplier of the minimal-standard Lehmer generator.
const LCG_MULTIPLIER: u64 = 16_807;
/// 2^31 - 1.
const LCG_MODULUS: u64 = 2_147_483_647;

/// Select `items[n mod len]`.
///
/// Callers must not pass an empty slice; lexicons are validated on load.
pub fn pick<T>(items: &[T], n: u64) -> &T {
    &items[(n % items.len() as u64) as usize]
}

/// A Fisher–Yates permutation of `items` driven by a Lehmer LCG seeded with `n`.
///
/// The first step multiplies the raw seed, which can exceed the modulus;
/// every later state is below 2^31, so `u64` arithmetic never overflows for
/// seeds under 2^39.
pub fn shuffle<T: Clone>(items: &[T], n: u64) -> Vec<T> {
    let mut result = items.to_vec();
    let mut state = n;
    for i in (1..result.len()).rev() {
        state = (state * LCG_MULTIPLIER) % LCG_MODULUS;
        let j = (state % (i as u64 + 1)) as usize;
        result.swap(i, j);
    }
    result
}
