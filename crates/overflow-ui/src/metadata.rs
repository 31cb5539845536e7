//! Human-readable post timestamps.

use chrono::{DateTime, Datelike, Utc};

/// Describe when something was posted relative to `now`.
///
/// Recent posts read "N seconds/minutes/hours ago"; older ones show the date,
/// with the year only when it differs from `now`.
pub fn format_meta(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted);
    let seconds = elapsed.num_seconds().max(0);

    if seconds < 60 {
        format!("{seconds} seconds ago")
    } else if elapsed.num_minutes() < 60 {
        format!("{} minutes ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{} hours ago", elapsed.num_hours())
    } else if posted.year() == now.year() {
        posted.format("%b %d at %H:%M").to_string()
    } else {
        posted.format("%b %d, %Y at %H:%M").to_string()
    }
}

/// "1 answer", "3 answers".
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
