use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of an inclusive range a date-only value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of `date` at microsecond precision, which is
/// what PostgreSQL `TIMESTAMP` stores.
pub fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_micro_opt(23, 59, 59, 999_999)
}

/// Parses a filter timestamp. RFC 3339 values are converted to UTC; naive
/// timestamps are taken as UTC; a plain `YYYY-MM-DD` covers the whole day.
pub fn parse_date_bound(value: &str, bound: DateBound) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    match bound {
        DateBound::Start => Some(start_of_day(date)),
        DateBound::End => end_of_day(date),
    }
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn plain_dates_cover_the_whole_day() {
        let start = parse_date_bound("2024-02-01", DateBound::Start).unwrap();
        let end = parse_date_bound("2024-02-28", DateBound::End).unwrap();

        assert_eq!(start, ymd_hms(2024, 2, 1, 0, 0, 0));
        assert!(end > ymd_hms(2024, 2, 28, 23, 59, 59));
        assert!(end < ymd_hms(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        let parsed = parse_date_bound("2024-01-05T10:00:00+02:00", DateBound::Start).unwrap();
        assert_eq!(parsed, ymd_hms(2024, 1, 5, 8, 0, 0));
    }

    #[test]
    fn naive_timestamps_are_accepted_as_is() {
        let t = parse_date_bound("2024-01-05T10:30:00", DateBound::End).unwrap();
        assert_eq!(t, ymd_hms(2024, 1, 5, 10, 30, 0));

        let s = parse_date_bound("2024-01-05 10:30:00", DateBound::Start).unwrap();
        assert_eq!(s, ymd_hms(2024, 1, 5, 10, 30, 0));
    }

    #[test]
    fn garbage_and_empty_values_are_rejected() {
        assert!(parse_date_bound("", DateBound::Start).is_none());
        assert!(parse_date_bound("yesterday", DateBound::Start).is_none());
        assert!(parse_date_bound("2024-13-01", DateBound::End).is_none());
        assert!(parse_date_bound("2024-02-30", DateBound::End).is_none());
    }
}
