//! Theme application for the demo window.

use eframe::egui;

use crate::app::AppState;

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so theme switches take effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme_name = state.themes.current_theme_name();
        if let Some(theme) = state.themes.get_theme(theme_name) {
            let mut visuals = if theme.name == "Light" {
                egui::Visuals::light()
            } else {
                egui::Visuals::dark()
            };

            state.themes.apply_theme(theme, &mut visuals);
            ctx.set_visuals(visuals);
        }
    }

    /// Switches theme and records it in the config so it persists.
    pub fn switch_theme(state: &mut AppState, name: &str) {
        match state.themes.set_current_theme(name) {
            Ok(()) => state.config.theme = name.to_string(),
            Err(err) => log::warn!("{err}"),
        }
    }
}
