use chrono::NaiveTime;
use std::cmp::Ordering;

/// Parse a 12-hour clock time such as "10:10 AM"
///
/// Returns `None` for anything that is not a clock time (e.g. "3 min").
#[must_use]
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()
}

/// Order two clock time strings within the same service day
///
/// Returns `None` if either side is not a clock time.
#[must_use]
pub fn compare_clock_times(a: &str, b: &str) -> Option<Ordering> {
    Some(parse_clock_time(a)?.cmp(&parse_clock_time(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_clock_time_morning() {
        let time = parse_clock_time("9:05 AM").expect("should parse");
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
    }

    #[test]
    fn test_parse_clock_time_evening() {
        let time = parse_clock_time("10:10 PM").expect("should parse");
        assert_eq!(time.hour(), 22);
        assert_eq!(time.minute(), 10);
    }

    #[test]
    fn test_parse_clock_time_noon_and_midnight() {
        assert_eq!(parse_clock_time("12:00 PM"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_clock_time("12:00 AM"), NaiveTime::from_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_parse_clock_time_rejects_countdown() {
        assert!(parse_clock_time("3 min").is_none());
        assert!(parse_clock_time("").is_none());
    }

    #[test]
    fn test_compare_clock_times() {
        assert_eq!(compare_clock_times("10:10 AM", "10:12 AM"), Some(Ordering::Less));
        assert_eq!(compare_clock_times("1:00 PM", "11:59 AM"), Some(Ordering::Greater));
        assert_eq!(compare_clock_times("8:00 AM", "8:00 AM"), Some(Ordering::Equal));
        assert_eq!(compare_clock_times("3 min", "8:00 AM"), None);
    }
}
