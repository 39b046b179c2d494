//! Calendar arithmetic for the week view.
//!
//! All month/year rollover goes through [`normalize_date`] so that overflow is
//! an explicit, tested rule instead of something a date constructor does
//! behind our back.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Japanese single-character weekday names, indexed from Sunday = 0.
pub const WEEKDAY_GLYPHS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Direction of a one-week jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekDirection {
    Previous,
    Next,
}

impl WeekDirection {
    /// -1 for `Previous`, +1 for `Next`.
    pub fn sign(self) -> i64 {
        match self {
            WeekDirection::Previous => -1,
            WeekDirection::Next => 1,
        }
    }

    /// Number of calendar days one step in this direction moves the anchor.
    pub fn day_offset(self) -> i64 {
        self.sign() * 7
    }
}

/// Build a canonical calendar date from possibly overflowing components.
///
/// `month` may fall outside 1..=12 and `day` outside the month's length; the
/// excess rolls into the neighbouring months and years. Day 0 is the last day
/// of the previous month, month 13 is January of the following year.
pub fn normalize_date(year: i32, month: i32, day: i64) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::DateOutOfRange { year, month, day };

    let month_index = month - 1;
    let normalized_year = year
        .checked_add(month_index.div_euclid(12))
        .ok_or_else(out_of_range)?;
    let normalized_month = month_index.rem_euclid(12) as u32 + 1;

    let first_of_month =
        NaiveDate::from_ymd_opt(normalized_year, normalized_month, 1).ok_or_else(out_of_range)?;

    let offset = day.checked_sub(1).ok_or_else(out_of_range)?;
    let offset = Duration::try_days(offset).ok_or_else(out_of_range)?;
    first_of_month
        .checked_add_signed(offset)
        .ok_or_else(out_of_range)
}

/// Return the Monday on or before `date`.
///
/// Sunday counts as the seventh day of its week, so a Sunday maps to the
/// Monday six days earlier rather than the one after it.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_since_monday = date.weekday().num_days_from_monday() as u64;
    // Only fails at chrono's minimum date, which has no earlier Monday to reach.
    date.checked_sub_days(chrono::Days::new(days_since_monday))
        .unwrap_or(date)
}

/// Shift a week anchor by one week, keeping it on the same weekday.
pub fn shift_week(anchor: NaiveDate, direction: WeekDirection) -> Result<NaiveDate, CalendarError> {
    normalize_date(
        anchor.year(),
        anchor.month() as i32,
        anchor.day() as i64 + direction.day_offset(),
    )
}

/// The seven dates of the week starting at `anchor`.
pub fn week_dates(anchor: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    (0..7)
        .map(|offset| {
            normalize_date(
                anchor.year(),
                anchor.month() as i32,
                anchor.day() as i64 + offset,
            )
        })
        .collect()
}

/// Single-character weekday name for `date`.
pub fn weekday_glyph(date: NaiveDate) -> &'static str {
    WEEKDAY_GLYPHS[date.weekday().num_days_from_sunday() as usize]
}

/// True when `date` is a Monday.
pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_normalize_date_in_range() {
        assert_eq!(normalize_date(2025, 3, 5).unwrap(), ymd(2025, 3, 5));
    }

    #[test]
    fn test_normalize_date_day_overflow() {
        assert_eq!(normalize_date(2025, 1, 32).unwrap(), ymd(2025, 2, 1));
        assert_eq!(normalize_date(2025, 2, 29).unwrap(), ymd(2025, 3, 1));
        assert_eq!(normalize_date(2024, 2, 29).unwrap(), ymd(2024, 2, 29));
        assert_eq!(normalize_date(2025, 12, 35).unwrap(), ymd(2026, 1, 4));
    }

    #[test]
    fn test_normalize_date_day_underflow() {
        assert_eq!(normalize_date(2025, 3, 0).unwrap(), ymd(2025, 2, 28));
        assert_eq!(normalize_date(2024, 3, 0).unwrap(), ymd(2024, 2, 29));
        assert_eq!(normalize_date(2025, 1, -6).unwrap(), ymd(2024, 12, 25));
    }

    #[test]
    fn test_normalize_date_month_overflow() {
        assert_eq!(normalize_date(2024, 13, 1).unwrap(), ymd(2025, 1, 1));
        assert_eq!(normalize_date(2025, 0, 1).unwrap(), ymd(2024, 12, 1));
        assert_eq!(normalize_date(2025, -11, 15).unwrap(), ymd(2024, 1, 15));
        assert_eq!(normalize_date(2025, 25, 1).unwrap(), ymd(2027, 1, 1));
    }

    #[test]
    fn test_normalize_date_out_of_range() {
        let result = normalize_date(i32::MAX, 12, 1);
        assert!(matches!(result, Err(CalendarError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_monday_of_every_weekday() {
        // 2025-03-03 is a Monday.
        for offset in 0..7 {
            let date = ymd(2025, 3, 3 + offset);
            assert_eq!(monday_of(date), ymd(2025, 3, 3), "date {date}");
        }
    }

    #[test]
    fn test_monday_of_sunday_goes_back() {
        let sunday = ymd(2025, 3, 9);
        assert_eq!(monday_of(sunday), ymd(2025, 3, 3));
    }

    #[test]
    fn test_monday_of_properties_across_years() {
        let mut date = ymd(2023, 12, 1);
        let end = ymd(2025, 3, 31);
        while date <= end {
            let monday = monday_of(date);
            assert!(is_monday(monday), "{monday} is not a Monday");
            assert!(monday <= date);
            assert!((date - monday).num_days() <= 6);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_shift_week_round_trip() {
        let anchor = ymd(2025, 3, 3);
        let next = shift_week(anchor, WeekDirection::Next).unwrap();
        assert_eq!(next, ymd(2025, 3, 10));
        assert_eq!(shift_week(next, WeekDirection::Previous).unwrap(), anchor);
    }

    #[test]
    fn test_shift_week_across_year_boundary() {
        let anchor = ymd(2024, 12, 30);
        assert_eq!(shift_week(anchor, WeekDirection::Next).unwrap(), ymd(2025, 1, 6));
        assert_eq!(
            shift_week(ymd(2025, 1, 6), WeekDirection::Previous).unwrap(),
            anchor
        );
    }

    #[test]
    fn test_week_dates() {
        let week = week_dates(ymd(2025, 3, 3)).unwrap();
        let expected: Vec<NaiveDate> = (3..=9).map(|d| ymd(2025, 3, d)).collect();
        assert_eq!(week, expected);
    }

    #[test]
    fn test_week_dates_month_rollover() {
        let week = week_dates(ymd(2025, 3, 31)).unwrap();
        assert_eq!(week.first(), Some(&ymd(2025, 3, 31)));
        assert_eq!(week.last(), Some(&ymd(2025, 4, 6)));
    }

    #[test]
    fn test_weekday_glyph() {
        assert_eq!(weekday_glyph(ymd(2025, 3, 2)), "日");
        assert_eq!(weekday_glyph(ymd(2025, 3, 3)), "月");
        assert_eq!(weekday_glyph(ymd(2025, 3, 5)), "水");
        assert_eq!(weekday_glyph(ymd(2025, 3, 8)), "土");
    }
}
