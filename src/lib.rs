pub mod option;
pub mod domain;
pub mod cache;
pub mod config;
pub mod theme;
pub mod ui;

// Export option model
pub use option::{SelectOption, SelectableValue};

// Export domain logic
pub use domain::dimensions::{EstimatorParams, ViewportDimensions};
pub use domain::flatten::{flatten_children, flatten_options, flatten_values, EntryKind, FlatEntry, MenuChildren, RenderedNode};
pub use domain::focus::{focused_entry_index, focused_index, step_focus, FocusTracker, ScrollHandle};
pub use domain::windowing::{Align, ItemStyle, ListViewport};

// Export caching
pub use cache::MenuCache;

// Export configuration and theming
pub use config::MenuConfig;
pub use theme::{MenuColors, MenuTheme, ThemeManager};

// Export widgets
pub use ui::{
    build_rows, GroupHeading, MenuNode, MenuOutput, MenuRow, RowParams, SelectMenu, SelectMenuOption,
    VirtualizedSelectMenu, MENU_ARIA_LABEL, OPTION_ARIA_LABEL,
};
