//! Identifier generators.

use chrono::Utc;
use rand::Rng;
use uuid::Builder;

/// Time-ordered unique identifier (UUID v7) in hyphenated text form.
///
/// The 48-bit prefix is the current Unix time in milliseconds; the remaining
/// bits come from the provided RNG.
pub fn unique_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let random_bytes: [u8; 10] = rng.random();
    Builder::from_unix_timestamp_millis(millis, &random_bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// Composite event identifier: `class_id * 1000 + (outcome_id & 0xFFFF)`.
pub fn composite_event_id(class_id: i64, outcome_id: i64) -> i64 {
    class_id
        .wrapping_mul(1000)
        .wrapping_add(outcome_id & 0xFFFF)
}
