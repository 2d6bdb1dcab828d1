//! The djb2 string hash and its reduction to a bucket index.
//!
//! The algorithm is fixed, not swappable: bucket placement must reproduce
//! djb2 byte-for-byte so identical keys always land on identical indices,
//! across calls and across processes.

/// Initial accumulator value of the djb2 algorithm.
const DJB2_SEED: u64 = 5381;

/// Hashes `bytes` with djb2: `acc = acc * 33 + byte`, wrapping on overflow.
///
/// Operates on raw bytes, so the result is insensitive to locale or
/// encoding concerns.
#[must_use]
pub(crate) fn djb2(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(DJB2_SEED, |acc, &byte| acc.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

/// Reduces the djb2 hash of `key` to an index in `[0, capacity)`.
///
/// `capacity` must be non-zero; the table constructor guarantees this.
#[must_use]
#[allow(clippy::cast_possible_truncation, trivial_numeric_casts)]
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert_ne!(capacity, 0);

    let hash = djb2(key.as_bytes());
    if size_of::<usize>() >= size_of::<u64>() {
        // `u64` fits in `usize` here, so the cast is lossless.
        (hash as usize) % capacity
    } else {
        // `capacity` fits in `u64`, and the remainder stays below
        // `capacity`, so the cast back to `usize` is lossless.
        (hash % (capacity as u64)) as usize
    }
}
