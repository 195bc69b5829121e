//! Menu theming.
//!
//! Provides the color palettes used by the select menu widgets and a small
//! manager holding the built-in `Light` and `Dark` themes.
//!
//! # Examples
//!
//! ```
//! use rselect::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Focused row: {:?}", dark.colors.option_focused);
//! ```

use eframe::egui;
use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Dark";

/// Colors for every part of a select menu
#[derive(Debug, Clone)]
pub struct MenuColors {
    // Container
    pub menu_background: Color32,
    pub border: Color32,

    // Option rows
    pub text: Color32,
    pub text_dim: Color32,
    pub option_focused: Color32,
    /// Accent bar drawn at the left edge of the selected option
    pub option_selected: Color32,
    pub option_disabled: Color32,

    // Group headers
    pub group_heading: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct MenuTheme {
    pub name: String,
    pub description: String,
    pub colors: MenuColors,
}

/// Registry of built-in themes plus the current selection
pub struct ThemeManager {
    themes: HashMap<String, MenuTheme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a manager with all built-in themes, `Dark` selected
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&MenuTheme> {
        self.themes.get(name)
    }

    /// Sorted theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The selected theme's colors
    pub fn current_colors(&self) -> MenuColors {
        self.themes
            .get(&self.current_theme_name)
            .map(|t| t.colors.clone())
            .unwrap_or_else(|| dark_theme().colors)
    }

    /// Selects a theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &MenuTheme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.menu_background;
        visuals.window_fill = colors.menu_background;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.option_focused;
        visuals.selection.stroke.color = colors.option_selected;

        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.hovered.bg_fill = colors.option_focused;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> MenuTheme {
    MenuTheme {
        name: "Light".to_string(),
        description: "Light menu on a white canvas".to_string(),
        colors: MenuColors {
            menu_background: hex_to_color32("#ffffff"),
            border: hex_to_color32("#d8d9dd"),

            text: hex_to_color32("#24292e"),
            text_dim: hex_to_color32("#6e7381"),
            option_focused: hex_to_color32("#e9eaed"),
            option_selected: hex_to_color32("#ff7828"),
            option_disabled: hex_to_color32("#acadb2"),

            group_heading: hex_to_color32("#464c54"),
        },
    }
}

fn dark_theme() -> MenuTheme {
    MenuTheme {
        name: "Dark".to_string(),
        description: "Dark menu on a near-black canvas".to_string(),
        colors: MenuColors {
            menu_background: hex_to_color32("#22252b"),
            border: hex_to_color32("#3b3f46"),

            text: hex_to_color32("#ccccdc"),
            text_dim: hex_to_color32("#8e8e9e"),
            option_focused: hex_to_color32("#33363d"),
            option_selected: hex_to_color32("#ff7828"),
            option_disabled: hex_to_color32("#5b5d63"),

            group_heading: hex_to_color32("#e0e0ea"),
        },
    }
}

/// Converts a hex color string (like "#22252b") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::BLACK
    }
}
