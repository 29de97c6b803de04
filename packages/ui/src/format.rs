//! Date and duration formatting helpers.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Format a number of seconds as `MM:SS`.
///
/// Minutes are not capped at 59, so an hour is `60:00`. Negative input is not
/// guarded: `-5` formats as `-1:-5`.
pub fn format_time(seconds: i64) -> String {
    let minutes = seconds.div_euclid(60);
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Format a date as `YYYY-MM-DD` in the local timezone.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    format_date(&Local::now())
}

/// Format a Unix timestamp in milliseconds as `YYYY-MM-DD` in the local
/// timezone. Returns an empty string when the timestamp is out of range.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(date) => format_date(&date),
        None => String::new(),
    }
}

/// Format a backend timestamp string as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 (`2024-03-05T08:30:00Z`), `YYYY-MM-DD HH:MM:SS` (already
/// local) and bare dates. Anything else is returned unchanged.
pub fn parse_and_format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return format_date(&date);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return naive.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Generate a short client-side identifier: `<base36 millis>-<base36 random>`.
///
/// Collisions between two calls are very unlikely but not ruled out; do not
/// use it for anything security related.
pub fn generate_uuid() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random: u64 = rand::thread_rng().gen();
    format!("{}-{}", to_base36(millis), to_base36(random))
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(599), "09:59");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_format_time_negative_is_unguarded() {
        assert_eq!(format_time(-5), "-1:-5");
        assert_eq!(format_time(-65), "-2:-5");
    }

    #[test]
    fn test_format_date_local() {
        let date = Local.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap();
        assert_eq!(format_date(&date), "2024-03-05");
    }

    #[test]
    fn test_format_date_converts_to_local() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let expected = utc.with_timezone(&Local).date_naive().to_string();
        assert_eq!(format_date(&utc), expected);
    }

    #[test]
    fn test_format_timestamp() {
        let date = Local.with_ymd_and_hms(2024, 3, 5, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(date.timestamp_millis()), "2024-03-05");
        assert_eq!(format_timestamp(i64::MAX), "");
    }

    #[test]
    fn test_parse_and_format_date() {
        assert_eq!(parse_and_format_date("2024-03-05 08:30:00"), "2024-03-05");
        assert_eq!(parse_and_format_date("2024-03-05"), "2024-03-05");
        assert_eq!(parse_and_format_date("yesterday"), "yesterday");

        let rfc = "2024-03-05T12:00:00+00:00";
        let expected = DateTime::parse_from_rfc3339(rfc)
            .unwrap()
            .with_timezone(&Local)
            .date_naive()
            .to_string();
        assert_eq!(parse_and_format_date(rfc), expected);
    }

    #[test]
    fn test_generate_uuid_shape() {
        let id = generate_uuid();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 2);
        for part in parts {
            assert!(!part.is_empty());
            assert!(part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_uuid_differs() {
        assert_ne!(generate_uuid(), generate_uuid());
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }
}
