pub mod header;
pub mod output_panel;
pub mod week_grid;
pub mod week_navigator;
