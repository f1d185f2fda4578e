//! Time helpers for server-local timestamps

use chrono::NaiveDateTime;

/// Format of timestamps in timetables and live telemetry
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whole minutes from `scheduled` to `actual`
///
/// Returns 0 when either timestamp does not parse.
pub fn delay_minutes(scheduled: &str, actual: &str) -> i64 {
    let scheduled = NaiveDateTime::parse_from_str(scheduled, DATE_TIME_FORMAT);
    let actual = NaiveDateTime::parse_from_str(actual, DATE_TIME_FORMAT);

    match (scheduled, actual) {
        (Ok(scheduled), Ok(actual)) => (actual - scheduled).num_minutes(),
        _ => 0,
    }
}

/// IANA zone name for a whole-hour UTC offset
///
/// `Etc/GMT` zones use inverted signs: UTC+1 is `Etc/GMT-1`. Offsets with no
/// `Etc/GMT` zone (outside -12..=14) fall back to UTC.
pub fn timezone_name(offset_hours: i32) -> String {
    match offset_hours {
        -12..=-1 | 1..=14 => format!("Etc/GMT{:+}", -offset_hours),
        _ => "UTC".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_in_whole_minutes() {
        assert_eq!(
            delay_minutes("2024-05-01 10:00:00", "2024-05-01 10:07:59"),
            7
        );
        assert_eq!(
            delay_minutes("2024-05-01 10:05:00", "2024-05-01 10:00:00"),
            -5
        );
        assert_eq!(
            delay_minutes("2024-05-01 23:50:00", "2024-05-02 00:10:00"),
            20
        );
    }

    #[test]
    fn test_unparseable_dates_mean_no_delay() {
        assert_eq!(delay_minutes("yesterday", "2024-05-01 10:00:00"), 0);
        assert_eq!(delay_minutes("2024-05-01 10:00:00", ""), 0);
    }

    #[test]
    fn test_timezone_names() {
        assert_eq!(timezone_name(0), "UTC");
        assert_eq!(timezone_name(1), "Etc/GMT-1");
        assert_eq!(timezone_name(2), "Etc/GMT-2");
        assert_eq!(timezone_name(-5), "Etc/GMT+5");
        assert_eq!(timezone_name(14), "Etc/GMT-14");
        assert_eq!(timezone_name(-12), "Etc/GMT+12");
    }

    #[test]
    fn test_out_of_range_offsets_fall_back_to_utc() {
        assert_eq!(timezone_name(15), "UTC");
        assert_eq!(timezone_name(-13), "UTC");
        assert_eq!(timezone_name(i32::MAX), "UTC");
        assert_eq!(timezone_name(i32::MIN), "UTC");
    }
}
