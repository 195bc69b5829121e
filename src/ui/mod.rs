//! egui widgets for the select menu
//!
//! - Option rows and group headings (the rendered nodes)
//! - Plain scrollable menu
//! - Virtualized menu (windowed rendering over flattened rows)
//! - Text measurement helpers

pub mod menu_option;
pub mod select_menu;
pub mod virtualized_menu;
pub mod text_utils;

pub use menu_option::{build_rows, GroupHeading, MenuNode, MenuRow, RowParams, SelectMenuOption, OPTION_ARIA_LABEL};
pub use select_menu::{SelectMenu, MENU_ARIA_LABEL};
pub use virtualized_menu::{MenuOutput, VirtualizedSelectMenu};
