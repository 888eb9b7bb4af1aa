//! Display helpers for capacity and sync-time rendering.

use chrono::{DateTime, Utc};
use humansize::{BINARY, format_size};

/// Format a byte count as a human-readable binary size (e.g. `"256 GiB"`).
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format a timestamp as a coarse relative duration (e.g. `"2h ago"`).
///
/// `now` is passed explicitly so callers (and tests) control the clock.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    if elapsed.num_days() > 0 {
        format!("{}d ago", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}m ago", elapsed.num_minutes())
    } else {
        "just now".to_string()
    }
}
