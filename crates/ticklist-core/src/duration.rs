//! Completion-time formatting.
//!
//! Durations are recorded into the spreadsheet as short human-readable
//! strings such as `"1h 2m 5s"` rather than raw second counts.

/// Format a duration in whole seconds as `"{h}h {m}m {s}s"`.
///
/// Zero-valued segments are omitted, except that a zero duration
/// formats as `"0s"` rather than an empty string. Exact unit
/// boundaries drop their zero sub-units (`3600` → `"1h"`).
///
/// # Example
///
/// ```
/// use ticklist_core::format_duration;
///
/// assert_eq!(format_duration(7325), "2h 2m 5s");
/// assert_eq!(format_duration(3600), "1h");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    parts.join(" ")
}
