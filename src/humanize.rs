use chrono::TimeDelta;

/// Describe how long ago (positive delta) or how far ahead (negative delta) something is,
/// e.g. "3 hours ago", "2 days from now", "now".
pub fn natural_time(delta: TimeDelta) -> String {
    let seconds = delta.num_seconds();
    if seconds == 0 {
        return "now".to_string();
    }
    let amount = natural_delta(seconds.unsigned_abs());
    if seconds > 0 {
        format!("{} ago", amount)
    } else {
        format!("{} from now", amount)
    }
}

fn natural_delta(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let years = seconds / DAY / 365;
    let days = seconds / DAY % 365;
    // Months are whole 30.5-day spans, rounded down.
    let months = days * 2 / 61;

    match years {
        0 => match seconds {
            1 => "a second".to_string(),
            s if s < MINUTE => format!("{} seconds", s),
            s if s < 2 * MINUTE => "a minute".to_string(),
            s if s < HOUR => format!("{} minutes", s / MINUTE),
            s if s < 2 * HOUR => "an hour".to_string(),
            s if s < DAY => format!("{} hours", s / HOUR),
            _ if days == 1 => "a day".to_string(),
            _ if months == 0 => format!("{} days", days),
            _ if months == 1 => "a month".to_string(),
            _ => format!("{} months", months),
        },
        1 => match (months, days) {
            (0, 0) => "a year".to_string(),
            (0, 1) => "1 year, 1 day".to_string(),
            (0, d) => format!("1 year, {} days", d),
            (1, _) => "1 year, 1 month".to_string(),
            (m, _) => format!("1 year, {} months", m),
        },
        y => format!("{} years", y),
    }
}
