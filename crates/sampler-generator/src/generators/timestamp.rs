//! Timestamp value generator.

use chrono::Utc;

/// Current UTC time in milliseconds since the Unix epoch.
///
/// This is NOT deterministic - each call returns the current time.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
