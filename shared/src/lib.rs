//! Domain logic for cal2text: week navigation, the half-hour slot grid, the
//! selection set and the shareable text format.
//!
//! Nothing here touches the browser; the frontend drives a [`Schedule`] and
//! renders what it reports.

pub mod calendar;
pub mod error;
pub mod format;
pub mod grid;
pub mod schedule;
pub mod selection;
pub mod slot;

pub use calendar::{monday_of, normalize_date, shift_week, week_dates, weekday_glyph, WeekDirection};
pub use error::CalendarError;
pub use format::{format_selection, INTRO_TEXT};
pub use grid::{DayColumn, GridConfig, GridRow, SlotGrid};
pub use schedule::Schedule;
pub use selection::SelectionSet;
pub use slot::{SlotDateTime, SlotTime};
