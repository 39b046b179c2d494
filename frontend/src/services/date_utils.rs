use chrono::{Datelike, NaiveDate};
use js_sys::Date;

/// Today's date in the browser's local time.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Heading for the displayed week, e.g. "2025年3月3日 〜 3月9日".
///
/// The year is repeated on the end date only when the week crosses into a
/// new year.
pub fn format_week_range(first: NaiveDate, last: NaiveDate) -> String {
    let start = format!("{}年{}月{}日", first.year(), first.month(), first.day());
    let end = if first.year() == last.year() {
        format!("{}月{}日", last.month(), last.day())
    } else {
        format!("{}年{}月{}日", last.year(), last.month(), last.day())
    };
    format!("{} 〜 {}", start, end)
}
