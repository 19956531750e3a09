//! Date labels used on the bookmarks page.

use chrono::{DateTime, Datelike, Duration, Utc};

/// Label used to group bookmarks, e.g. "January 2024"
pub fn month_label(time: &DateTime<Utc>) -> String {
    time.format("%B %Y").to_string()
}

/// Month and day of month with an ordinal suffix, e.g. "March 3rd"
pub fn day_label(time: &DateTime<Utc>) -> String {
    let day = time.day();
    format!("{} {}{}", time.format("%B"), day, ordinal_suffix(day))
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Is `time` strictly after `now - window`?
pub fn is_recent(time: &DateTime<Utc>, now: &DateTime<Utc>, window: Duration) -> bool {
    *time > *now - window
}

///
/// Human readable distance between `time` and `now`, e.g. "3 hours ago" or "in a minute".
///
/// Each unit is rounded, and the coarser unit is used once the finer one reaches its threshold
/// (45 seconds, 45 minutes, 22 hours).
///
pub fn time_ago(time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = *now - *time;
    let millis = delta.num_milliseconds().abs() as f64;

    let seconds = (millis / 1000.0).round() as i64;
    let minutes = (millis / 60_000.0).round() as i64;
    let hours = (millis / 3_600_000.0).round() as i64;
    let days = (millis / 86_400_000.0).round() as i64;

    let distance = if seconds < 45 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{} hours", hours)
    } else if days <= 1 {
        "a day".to_string()
    } else {
        format!("{} days", days)
    };

    if delta < Duration::zero() {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_month_label() {
        assert_eq!("January 2024", month_label(&at("2024-01-02T00:00:00Z")));
        assert_eq!("December 2023", month_label(&at("2023-12-31T23:59:59Z")));
    }

    #[test]
    fn test_day_label_ordinals() {
        let day = |d| day_label(&Utc.with_ymd_and_hms(2020, 3, d, 12, 0, 0).unwrap());
        assert_eq!("March 1st", day(1));
        assert_eq!("March 2nd", day(2));
        assert_eq!("March 3rd", day(3));
        assert_eq!("March 4th", day(4));
        assert_eq!("March 11th", day(11));
        assert_eq!("March 12th", day(12));
        assert_eq!("March 13th", day(13));
        assert_eq!("March 21st", day(21));
        assert_eq!("March 22nd", day(22));
        assert_eq!("March 23rd", day(23));
        assert_eq!("March 31st", day(31));
    }

    #[test]
    fn test_recent_window_is_exclusive() {
        let now = at("2024-01-02T12:00:00Z");
        let window = Duration::hours(12);
        assert!(is_recent(&at("2024-01-02T00:00:01Z"), &now, window));
        assert!(!is_recent(&at("2024-01-02T00:00:00Z"), &now, window));
        assert!(!is_recent(&at("2024-01-01T23:59:59Z"), &now, window));
        // Clock skew
        assert!(is_recent(&at("2024-01-02T12:05:00Z"), &now, window));
    }

    #[test]
    fn test_time_ago() {
        let now = at("2024-01-02T12:00:00Z");
        let ago = |d: Duration| time_ago(&(now - d), &now);

        assert_eq!("a few seconds ago", ago(Duration::seconds(10)));
        assert_eq!("a minute ago", ago(Duration::seconds(50)));
        assert_eq!("a minute ago", ago(Duration::seconds(89)));
        assert_eq!("2 minutes ago", ago(Duration::seconds(91)));
        assert_eq!("44 minutes ago", ago(Duration::minutes(44)));
        assert_eq!("an hour ago", ago(Duration::minutes(45)));
        assert_eq!("an hour ago", ago(Duration::minutes(89)));
        assert_eq!("2 hours ago", ago(Duration::minutes(91)));
        assert_eq!("3 hours ago", ago(Duration::hours(3)));
        assert_eq!("12 hours ago", ago(Duration::hours(12)));
        assert_eq!("a day ago", ago(Duration::hours(30)));
        assert_eq!("3 days ago", ago(Duration::days(3)));
    }

    #[test]
    fn test_time_ago_future() {
        let now = at("2024-01-02T12:00:00Z");
        assert_eq!("in a few seconds", time_ago(&(now + Duration::seconds(5)), &now));
        assert_eq!("in 5 minutes", time_ago(&(now + Duration::minutes(5)), &now));
    }
}
