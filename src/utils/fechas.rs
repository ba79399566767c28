//! Date helpers for epoch-stored dates.
//!
//! All date columns are stored as Unix timestamps (UTC). Attendance and
//! KPI queries work over half-open `[start, end)` ranges produced here.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::errors::{Result, SgaError};

const SECONDS_PER_DAY: i64 = 86_400;
const PROMOTION_SHIFT_DAYS: i64 = 365;
/// Exactly 365 days, the bulk-promotion date shift.
pub const SECONDS_PER_YEAR: i64 = PROMOTION_SHIFT_DAYS * SECONDS_PER_DAY;

/// Parse a `YYYY-MM-DD` form field into an epoch timestamp at UTC midnight.
pub fn parse_fecha(input: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")?;
    let datetime = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| SgaError::date_parse(format!("Invalid date: {input}")))?;
    Ok(Utc.from_utc_datetime(&datetime).timestamp())
}

/// Format an epoch timestamp back into a `YYYY-MM-DD` string.
pub fn format_fecha(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

/// Half-open `[start, end)` range covering the calendar day of `now`.
pub fn day_range(now: DateTime<Utc>) -> (i64, i64) {
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt).timestamp())
        .unwrap_or_default();
    (start, start + SECONDS_PER_DAY)
}

/// Half-open `[start, end)` range covering the calendar month of `now`.
pub fn month_range(now: DateTime<Utc>) -> (i64, i64) {
    let year = now.year();
    let month = now.month();
    let start = first_of_month(year, month);
    let end = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (start, end)
}

/// Half-open `[start, end)` range for a `YYYY-MM` query parameter.
pub fn parse_month_range(input: &str) -> Result<(i64, i64)> {
    let date = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")?;
    let start = first_of_month(date.year(), date.month());
    let end = if date.month() == 12 {
        first_of_month(date.year() + 1, 1)
    } else {
        first_of_month(date.year(), date.month() + 1)
    };
    Ok((start, end))
}

fn first_of_month(year: i32, month: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt).timestamp())
        .unwrap_or_default()
}

/// Shift a group period date forward by one academic year (365 days),
/// matching the bulk-promotion semantics.
pub fn shift_one_year(timestamp: i64) -> i64 {
    timestamp + SECONDS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_roundtrip() {
        let ts = parse_fecha("2026-08-26").unwrap();
        assert_eq!(format_fecha(ts), "2026-08-26");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_fecha("26/08/2026").is_err());
        assert!(parse_fecha("not-a-date").is_err());
    }

    #[test]
    fn test_day_range_covers_one_day() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 15, 30, 0).unwrap();
        let (start, end) = day_range(now);
        assert_eq!(end - start, 86_400);
        assert!(start <= now.timestamp() && now.timestamp() < end);
    }

    #[test]
    fn test_month_range_boundaries() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap();
        let (start, end) = month_range(now);
        assert_eq!(format_fecha(start), "2026-08-01");
        assert_eq!(format_fecha(end), "2026-09-01");
    }

    #[test]
    fn test_month_range_december_rolls_over() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 23, 0, 0).unwrap();
        let (start, end) = month_range(now);
        assert_eq!(format_fecha(start), "2026-12-01");
        assert_eq!(format_fecha(end), "2027-01-01");
    }

    #[test]
    fn test_shift_one_year_is_365_days() {
        let ts = parse_fecha("2026-08-26").unwrap();
        assert_eq!(format_fecha(shift_one_year(ts)), "2027-08-26");
    }
}
