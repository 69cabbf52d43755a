use chrono::{DateTime, Utc};

/// Format a count for compact display ("742", "1.2k", "48.1k", "1.3m")
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}m", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a DateTime as relative time (e.g., "3 days ago")
pub fn format_relative(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);
    let secs = duration.num_seconds();

    if secs < 60 {
        return "just now".to_string();
    }

    let units = [
        (365 * 24 * 60 * 60, "year", "years"),
        (30 * 24 * 60 * 60, "month", "months"),
        (7 * 24 * 60 * 60, "week", "weeks"),
        (24 * 60 * 60, "day", "days"),
        (60 * 60, "hour", "hours"),
        (60, "min", "mins"),
    ];

    for (unit_secs, singular, plural) in units {
        if secs >= unit_secs {
            let count = secs / unit_secs;
            let label = if count == 1 { singular } else { plural };
            return format!("{} {} ago", count, label);
        }
    }

    "just now".to_string()
}
