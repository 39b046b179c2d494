use crate::selection::SelectionSet;

/// Fixed opening sentence of the shared text.
pub const INTRO_TEXT: &str = "下記の日時でご都合いかがでしょうか。";

/// Render the selection as shareable text.
///
/// The intro line is always followed by a newline; entries follow one per
/// line, oldest first, with no trailing newline.
pub fn format_selection(selection: &SelectionSet) -> String {
    let entries: Vec<String> = selection.iter().map(|slot| slot.to_japanese()).collect();
    format!("{}\n{}", INTRO_TEXT, entries.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{SlotDateTime, SlotTime};
    use chrono::NaiveDate;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> SlotDateTime {
        SlotDateTime::new(
            NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
            SlotTime::new(hour, minute).unwrap(),
        )
    }

    #[test]
    fn test_empty_selection_is_intro_only() {
        let text = format_selection(&SelectionSet::new());
        assert_eq!(text, "下記の日時でご都合いかがでしょうか。\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_single_entry() {
        let mut selection = SelectionSet::new();
        selection.toggle(at(3, 5, 14, 0));
        assert_eq!(
            format_selection(&selection),
            "下記の日時でご都合いかがでしょうか。\n3月5日（水）14:00"
        );
    }

    #[test]
    fn test_entries_in_chronological_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(at(3, 3, 9, 0));
        selection.toggle(at(3, 3, 8, 30));
        assert_eq!(
            format_selection(&selection),
            "下記の日時でご都合いかがでしょうか。\n3月3日（月）08:30\n3月3日（月）09:00"
        );
    }

    #[test]
    fn test_end_of_day_entry() {
        let mut selection = SelectionSet::new();
        selection.toggle(SlotDateTime::new(
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            SlotTime::END_OF_DAY,
        ));
        selection.toggle(at(3, 9, 23, 30));
        assert_eq!(
            format_selection(&selection),
            "下記の日時でご都合いかがでしょうか。\n3月9日（日）23:30\n3月9日（日）24:00"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let mut selection = SelectionSet::new();
        selection.toggle(at(12, 31, 6, 0));
        selection.toggle(at(1, 1, 7, 30));
        let text = format_selection(&selection);
        assert!(!text.ends_with('\n'));
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().nth(1), Some("1月1日（水）07:30"));
    }
}
