pub mod use_clipboard;
pub mod use_schedule;
