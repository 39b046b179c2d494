//! Slot grid generation: the visible week and the half-hour rows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{week_dates, weekday_glyph};
use crate::error::CalendarError;
use crate::slot::{SlotDateTime, SlotTime};

/// Shape of the time grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Hour of the first row.
    pub first_hour: u32,
    /// Minutes between rows. Must divide 60.
    pub slot_minutes: u32,
    /// Number of rows.
    pub slot_count: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: 6,
            slot_minutes: 30,
            slot_count: 37,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(CalendarError::InvalidConfig(format!(
                "slot_minutes must divide 60, got {}",
                self.slot_minutes
            )));
        }
        if self.slot_count == 0 {
            return Err(CalendarError::InvalidConfig(
                "slot_count must be at least 1".to_string(),
            ));
        }
        let last = self.first_hour as u64 * 60
            + (self.slot_count as u64 - 1) * self.slot_minutes as u64;
        if last > 24 * 60 {
            return Err(CalendarError::InvalidConfig(format!(
                "grid runs past 24:00 ({} rows of {} minutes from {:02}:00)",
                self.slot_count, self.slot_minutes, self.first_hour
            )));
        }
        Ok(())
    }

    /// Row markers, first to last.
    pub fn slots(&self) -> Result<Vec<SlotTime>, CalendarError> {
        self.validate()?;
        (0..self.slot_count)
            .map(|index| {
                let minutes = self.first_hour * 60 + index * self.slot_minutes;
                SlotTime::new(minutes / 60, minutes % 60)
            })
            .collect()
    }

    fn rows_per_hour(&self) -> u32 {
        60 / self.slot_minutes
    }
}

/// Column header for one visible date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// `M/D`
    pub label: String,
    pub weekday: &'static str,
}

impl DayColumn {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: format!("{}/{}", date.month(), date.day()),
            weekday: weekday_glyph(date),
        }
    }
}

/// One grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub time: SlotTime,
    /// Rows covered by the hour label that starts on this row; `0` when the
    /// row sits under a label started further up.
    pub label_rowspan: u32,
}

/// The full week grid derived from an anchor date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    pub columns: Vec<DayColumn>,
    pub rows: Vec<GridRow>,
}

impl SlotGrid {
    pub fn for_anchor(anchor: NaiveDate, config: &GridConfig) -> Result<Self, CalendarError> {
        let columns = week_dates(anchor)?.into_iter().map(DayColumn::new).collect();

        let slots = config.slots()?;
        let per_hour = config.rows_per_hour();
        let total = slots.len() as u32;
        let rows = slots
            .into_iter()
            .enumerate()
            .map(|(index, time)| {
                let remaining = total - index as u32;
                let label_rowspan = if time.is_on_the_hour() {
                    per_hour.min(remaining)
                } else {
                    0
                };
                GridRow { time, label_rowspan }
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.columns.iter().map(|column| column.date)
    }

    /// Every cell of `row`, left to right.
    pub fn cells_in_row<'a>(&'a self, row: &'a GridRow) -> impl Iterator<Item = SlotDateTime> + 'a {
        self.dates().map(move |date| SlotDateTime::new(date, row.time))
    }

    pub fn cell_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }
}
