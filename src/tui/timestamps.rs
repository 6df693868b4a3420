use chrono::{DateTime, Local, Utc};

/// History times are always from the current session, so show the local
/// wall-clock time plus how long ago it was: "14:03:27 (5m ago)".
pub fn format_history_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let clock = timestamp.with_timezone(&Local).format("%H:%M:%S");
    format!("{} ({})", clock, format_elapsed(now.signed_duration_since(*timestamp).num_seconds()))
}

fn format_elapsed(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
