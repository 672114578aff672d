//! Display formats
//!
//! - Clock: `HH:MM:SS`, 24-hour, zero-padded
//! - Stopwatch: `HH:MM:SS.ss` (hundredths, truncated)
//! - Countdown: `HH:MM:SS` (floored to whole seconds)

use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};

pub const STOPWATCH_ZERO: &str = "00:00:00.00";
pub const COUNTDOWN_ZERO: &str = "00:00:00";

pub fn format_clock(local: &NaiveDateTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        local.hour(),
        local.minute(),
        local.second()
    )
}

pub fn format_date(local: &NaiveDateTime) -> String {
    local.format("%A, %d %B %Y").to_string()
}

pub fn format_stopwatch(elapsed: Duration) -> String {
    let centis = elapsed.as_millis() / 10;
    let (hours, rest) = (centis / 360_000, centis % 360_000);
    let (minutes, rest) = (rest / 6_000, rest % 6_000);
    let (seconds, centis) = (rest / 100, rest % 100);
    format!("{hours:02}:{minutes:02}:{seconds:02}.{centis:02}")
}

pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0, "00:00:00")]
    #[case(7, 5, 9, "07:05:09")]
    #[case(23, 59, 59, "23:59:59")]
    fn test_format_clock(#[case] h: u32, #[case] m: u32, #[case] s: u32, #[case] expected: &str) {
        let local = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_milli_opt(h, m, s, 999))
            .expect("valid datetime");
        assert_eq!(format_clock(&local), expected);
    }

    #[test]
    fn test_format_date() {
        let local = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid datetime");
        assert_eq!(format_date(&local), "Saturday, 09 March 2024");
    }

    #[rstest]
    #[case(Duration::ZERO, STOPWATCH_ZERO)]
    #[case(Duration::from_millis(1_239), "00:00:01.23")]
    #[case(Duration::from_millis(59_999), "00:00:59.99")]
    #[case(Duration::from_millis(61_050), "00:01:01.05")]
    #[case(Duration::from_secs(3 * 3600 + 25 * 60 + 7), "03:25:07.00")]
    fn test_format_stopwatch(#[case] elapsed: Duration, #[case] expected: &str) {
        assert_eq!(format_stopwatch(elapsed), expected);
    }

    #[rstest]
    #[case(Duration::ZERO, COUNTDOWN_ZERO)]
    #[case(Duration::from_millis(1_999), "00:00:01")]
    #[case(Duration::from_secs(90), "00:01:30")]
    #[case(Duration::from_secs(36_000 + 61), "10:01:01")]
    fn test_format_countdown(#[case] remaining: Duration, #[case] expected: &str) {
        assert_eq!(format_countdown(remaining), expected);
    }
}
