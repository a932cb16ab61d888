use super::*;
use chrono::TimeZone;

#[test]
fn format_timestamp_renders_month_day_year_time() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 7, 14, 2, 30).unwrap();
    assert_eq!(format_timestamp(&ts), "Mar 7, 2026 14:02");
}

#[test]
fn format_timestamp_single_digit_day_has_no_padding() {
    let ts = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    assert_eq!(format_timestamp(&ts), "Jan 5, 2026 09:00");
}

#[test]
fn format_timestamp_double_digit_day() {
    let ts = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(format_timestamp(&ts), "Dec 31, 2025 23:59");
}
