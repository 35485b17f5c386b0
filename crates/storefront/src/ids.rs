//! Identifier generation.
//!
//! Orders and bookings get short human-readable reference codes
//! (`ORD-7KQ2M`); admin-created records are keyed by creation time in
//! milliseconds. Both are regenerated until they miss every existing key.

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 5;

/// Prefix for order reference codes.
pub const ORDER_PREFIX: &str = "ORD";
/// Prefix for booking reference codes.
pub const BOOKING_PREFIX: &str = "BKG";

/// `<prefix>-` followed by five characters from `A-Z0-9`.
pub fn reference_code<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let suffix: String = (0..CODE_LENGTH)
        .filter_map(|_| ALPHABET.choose(rng).map(|&byte| char::from(byte)))
        .collect();
    format!("{prefix}-{suffix}")
}

/// A reference code not rejected by `taken`.
pub fn unique_reference<F>(prefix: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut rng = rand::rng();
    loop {
        let code = reference_code(prefix, &mut rng);
        if !taken(&code) {
            return code;
        }
        tracing::debug!(code = %code, "Reference code collision, regenerating");
    }
}

/// Current time in milliseconds, bumped past any value rejected by `taken`.
pub fn unique_millis<F>(taken: F) -> u64
where
    F: Fn(u64) -> bool,
{
    let mut millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    while taken(millis) {
        millis += 1;
    }
    millis
}
