//! Schedule state: the displayed week plus the selected slots.
//!
//! The UI owns exactly one `Schedule` and mutates it only through the methods
//! here, so every transition can be exercised without a browser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{monday_of, shift_week, WeekDirection};
use crate::error::CalendarError;
use crate::format::format_selection;
use crate::grid::{GridConfig, SlotGrid};
use crate::selection::SelectionSet;
use crate::slot::SlotDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    anchor: NaiveDate,
    selection: SelectionSet,
}

impl Schedule {
    /// Start on the week containing `today` with nothing selected.
    pub fn starting_from(today: NaiveDate) -> Self {
        Self {
            anchor: monday_of(today),
            selection: SelectionSet::new(),
        }
    }

    /// Monday of the displayed week.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Move the displayed week by seven days. Selections are kept.
    ///
    /// Returns `false` and leaves the anchor untouched if the new week would
    /// fall outside the supported calendar range.
    pub fn advance_week(&mut self, direction: WeekDirection) -> bool {
        match shift_week(self.anchor, direction) {
            Ok(anchor) => {
                log::info!("Week moved {:?}: {} -> {}", direction, self.anchor, anchor);
                self.anchor = anchor;
                true
            }
            Err(e) => {
                log::warn!("Cannot move week {:?} from {}: {}", direction, self.anchor, e);
                false
            }
        }
    }

    pub fn toggle(&mut self, slot: SlotDateTime) -> bool {
        self.selection.toggle(slot)
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    pub fn is_selected(&self, slot: &SlotDateTime) -> bool {
        self.selection.is_selected(slot)
    }

    pub fn grid(&self, config: &GridConfig) -> Result<SlotGrid, CalendarError> {
        SlotGrid::for_anchor(self.anchor, config)
    }

    /// Text ready for the clipboard.
    pub fn formatted_text(&self) -> String {
        format_selection(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INTRO_TEXT;
    use crate::slot::SlotTime;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_starts_on_monday() {
        assert_eq!(Schedule::starting_from(ymd(2025, 3, 5)).anchor(), ymd(2025, 3, 3));
        assert_eq!(Schedule::starting_from(ymd(2025, 3, 9)).anchor(), ymd(2025, 3, 3));
        assert_eq!(Schedule::starting_from(ymd(2025, 3, 10)).anchor(), ymd(2025, 3, 10));
        assert!(Schedule::starting_from(ymd(2025, 3, 5)).selection().is_empty());
    }

    #[test]
    fn test_advance_week_round_trip() {
        let mut schedule = Schedule::starting_from(ymd(2025, 3, 3));
        assert!(schedule.advance_week(WeekDirection::Next));
        assert_eq!(schedule.anchor(), ymd(2025, 3, 10));
        assert!(schedule.advance_week(WeekDirection::Previous));
        assert_eq!(schedule.anchor(), ymd(2025, 3, 3));
    }

    #[test]
    fn test_advance_week_is_unbounded() {
        let mut schedule = Schedule::starting_from(ymd(2025, 3, 3));
        for _ in 0..520 {
            assert!(schedule.advance_week(WeekDirection::Previous));
        }
        assert!(crate::calendar::is_monday(schedule.anchor()));
        for _ in 0..520 {
            schedule.advance_week(WeekDirection::Next);
        }
        assert_eq!(schedule.anchor(), ymd(2025, 3, 3));
    }

    #[test]
    fn test_advance_week_at_calendar_limit_keeps_anchor() {
        let mut schedule = Schedule::starting_from(NaiveDate::MAX);
        let anchor = schedule.anchor();
        assert!(!schedule.advance_week(WeekDirection::Next));
        assert_eq!(schedule.anchor(), anchor);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut schedule = Schedule::starting_from(ymd(2025, 3, 3));
        let slot = SlotDateTime::new(ymd(2025, 3, 5), SlotTime::new(14, 0).unwrap());
        schedule.toggle(slot);
        schedule.advance_week(WeekDirection::Next);
        assert!(schedule.is_selected(&slot));
    }

    #[test]
    fn test_select_cell_from_grid_and_format() {
        let mut schedule = Schedule::starting_from(ymd(2025, 3, 3));
        let grid = schedule.grid(&GridConfig::default()).unwrap();

        let row = grid
            .rows
            .iter()
            .find(|row| row.time == SlotTime::new(14, 0).unwrap())
            .unwrap();
        let cell = grid.cells_in_row(row).nth(2).unwrap();
        assert_eq!(cell.date, ymd(2025, 3, 5));

        schedule.toggle(cell);
        assert_eq!(
            schedule.formatted_text(),
            "下記の日時でご都合いかがでしょうか。\n3月5日（水）14:00"
        );
    }

    #[test]
    fn test_reset() {
        let mut schedule = Schedule::starting_from(ymd(2025, 3, 3));
        schedule.toggle(SlotDateTime::new(ymd(2025, 3, 3), SlotTime::new(9, 0).unwrap()));
        schedule.reset();
        assert_eq!(schedule.formatted_text(), format!("{}\n", INTRO_TEXT));
    }
}
