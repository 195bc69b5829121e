//! Centralized state for the select menu demo.

use rselect::{step_focus, MenuConfig, SelectOption, ThemeManager, VirtualizedSelectMenu};

/// Which menu implementation is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MenuMode {
    Virtualized,
    Plain,
}

/// Demo application state.
pub struct AppState {
    /// Option hierarchy shown in the menu
    pub options: Vec<SelectOption<u64>>,

    /// Keyboard focus (value identity)
    pub focused: Option<u64>,

    /// Last picked value
    pub selected: Option<u64>,

    pub mode: MenuMode,

    pub config: MenuConfig,

    pub themes: ThemeManager,

    /// Persistent state of the virtualized menu
    pub menu: VirtualizedSelectMenu,

    /// Error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(options: Vec<SelectOption<u64>>, config: MenuConfig, mode: MenuMode) -> Self {
        let mut themes = ThemeManager::new();
        let error_message = themes.set_current_theme(&config.theme).err();

        Self {
            options,
            focused: None,
            selected: None,
            mode,
            menu: VirtualizedSelectMenu::with_config("demo_virtualized_menu", &config),
            config,
            themes,
            error_message,
        }
    }

    /// Replaces the option set, dropping focus and selection.
    pub fn set_options(&mut self, options: Vec<SelectOption<u64>>) {
        self.options = options;
        self.focused = None;
        self.selected = None;
        self.menu.invalidate();
    }

    /// Re-applies the config to the menu after it changed.
    pub fn apply_config(&mut self) {
        if let Err(err) = self.config.validate() {
            self.error_message = Some(format!("{err:#}"));
            return;
        }
        self.menu.apply_config(&self.config);
        self.error_message = None;
    }

    /// Moves keyboard focus by `delta` pickable rows.
    pub fn move_focus(&mut self, delta: isize) {
        let entries = rselect::flatten_options(&self.options);
        let current = rselect::focused_entry_index(&self.options, &entries, self.focused.as_ref());

        self.focused = step_focus(&self.options, &entries, current, delta)
            .and_then(|row| entries[row].resolve(&self.options))
            .map(|v| v.value);
    }

    /// Picks the focused value.
    pub fn select_focused(&mut self) {
        if let Some(value) = self.focused {
            self.select(value);
        }
    }

    /// Picks a value by flattened row.
    pub fn select_row(&mut self, row: usize) {
        let entries = rselect::flatten_options(&self.options);
        let value = entries
            .get(row)
            .filter(|entry| !entry.is_header())
            .and_then(|entry| entry.resolve(&self.options))
            .filter(|v| !v.is_disabled)
            .map(|v| v.value);

        if let Some(value) = value {
            self.focused = Some(value);
            self.select(value);
        }
    }

    fn select(&mut self, value: u64) {
        log::info!("selected option {value}");
        self.selected = Some(value);
    }
}
