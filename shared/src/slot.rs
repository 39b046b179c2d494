use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::weekday_glyph;
use crate::error::CalendarError;

/// A time-of-day marker on the grid.
///
/// `24:00` is allowed and means the end of the column's own date; it never
/// rolls over into the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    pub const END_OF_DAY: SlotTime = SlotTime { hour: 24, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        if !valid {
            return Err(CalendarError::InvalidSlot { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes since 00:00 of the column date (1440 for `24:00`).
    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    pub fn is_on_the_hour(&self) -> bool {
        self.minute == 0
    }

    pub fn is_end_of_day(&self) -> bool {
        *self == Self::END_OF_DAY
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One selectable grid cell: a date plus a slot on that date.
///
/// Ordering is chronological; the derived field order (date, then time) is
/// what makes `24:00` sort between `23:30` and the next day's first slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotDateTime {
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl SlotDateTime {
    pub fn new(date: NaiveDate, time: SlotTime) -> Self {
        Self { date, time }
    }

    /// Render as `<month>月<day>日（<weekday>）<HH:MM>`.
    pub fn to_japanese(&self) -> String {
        format!(
            "{}月{}日（{}）{}",
            self.date.month(),
            self.date.day(),
            weekday_glyph(self.date),
            self.time
        )
    }
}

impl fmt::Display for SlotDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date.format("%Y-%m-%d"), self.time)
    }
}
