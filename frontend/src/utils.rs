use chrono::{DateTime, NaiveDate, Utc};

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = value.parse::<DateTime<Utc>>() {
        return Some(datetime);
    }
    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
}

/// Parses a `yyyy-MM-dd` date as midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.abs().to_string();
    let mut result = String::new();
    let len = num_str.len();

    if number < 0 {
        result.push('-');
    }
    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Formats a duration in seconds as `1h 4m`, or `1h 4m 5s` with `show_seconds`.
pub fn convert_time_with_titles(total_seconds: u64, show_seconds: bool) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if show_seconds && (seconds > 0 || parts.is_empty()) {
        parts.push(format!("{seconds}s"));
    }

    if parts.is_empty() {
        "< 1m".to_string()
    } else {
        parts.join(" ")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human friendly distance between `date` and `now`, e.g. `3 days ago`.
pub fn friendly_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(date).num_seconds();
    let future = seconds < 0;
    let seconds = seconds.abs();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let distance = if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    };

    if future {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn durations_with_titles() {
        assert_eq!(convert_time_with_titles(3840, false), "1h 4m");
        assert_eq!(convert_time_with_titles(3600, false), "1h");
        assert_eq!(convert_time_with_titles(2160, false), "36m");
        assert_eq!(convert_time_with_titles(245, true), "4m 5s");
        assert_eq!(convert_time_with_titles(45, true), "45s");
        assert_eq!(convert_time_with_titles(0, true), "0s");
        assert_eq!(convert_time_with_titles(45, false), "< 1m");
    }

    #[test]
    fn friendly_time_buckets() {
        let now = parse_timestamp("2021-06-15T12:00:00Z").unwrap();

        assert_eq!(friendly_time(now - Duration::seconds(20), now), "just now");
        assert_eq!(friendly_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(friendly_time(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(friendly_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(friendly_time(now - Duration::days(70), now), "2 months ago");
        assert_eq!(friendly_time(now - Duration::days(800), now), "2 years ago");
        assert_eq!(friendly_time(now + Duration::days(2), now), "in 2 days");
    }

    #[test]
    fn timestamps_and_dates() {
        assert!(parse_timestamp("2020-01-02T03:04:05Z").is_some());
        assert_eq!(
            parse_timestamp("1600000000").map(|d| d.timestamp()),
            Some(1_600_000_000)
        );
        assert!(parse_timestamp("yesterday").is_none());

        let date = parse_date("2021-03-01").unwrap();
        assert_eq!(date.to_rfc3339(), "2021-03-01T00:00:00+00:00");
        assert!(parse_date("03/01/2021").is_none());
    }

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12345), "12,345");
        assert_eq!(format_number(-1234567), "-1,234,567");
    }
}
