use chrono::NaiveDate;
use opsdesk::utils::datetime::{format_human_date, format_human_datetime, format_ymd, parse_date, parse_record_date};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_human_dates() {
    let today = day(2024, 1, 15);
    assert_eq!(format_human_date(today, today), "today");
    assert_eq!(format_human_date(day(2024, 1, 14), today), "yesterday");
    assert_eq!(format_human_date(day(2024, 1, 16), today), "tomorrow");
    assert_eq!(format_human_date(day(2024, 1, 12), today), "3 days ago");
    assert_eq!(format_human_date(day(2024, 1, 20), today), "in 5 days");
    assert_eq!(format_human_date(day(2024, 3, 2), today), "Mar 02");
    assert_eq!(format_human_date(day(2023, 12, 1), today), "Dec 01, 2023");
}

#[test]
fn test_human_datetime_cells() {
    let today = day(2024, 1, 31);
    assert_eq!(format_human_datetime("2024-01-31T09:12:00Z", today), "today at 09:12");
    assert_eq!(format_human_datetime("2024-01-30T23:30:00-02:00", today), "today at 01:30");
    // Plain text and bare dates are shown as-is
    assert_eq!(format_human_datetime("Support Agent", today), "Support Agent");
    assert_eq!(format_human_datetime("2024-01-31", today), "2024-01-31");
}

#[test]
fn test_parse_and_format_round() {
    let date = parse_date("2024-02-29").unwrap();
    assert_eq!(format_ymd(date), "2024-02-29");
    assert!(parse_date("2023-02-29").is_err());
    assert_eq!(parse_record_date("2024-01-31T23:30:00-05:00"), Some(day(2024, 2, 1)));
    assert_eq!(parse_record_date(""), None);
}
