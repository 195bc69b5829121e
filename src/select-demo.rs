//! Select Menu Demo
//!
//! Interactive showcase for the `rselect` menus using the egui framework:
//! - Large grouped option set rendered through the virtualized menu
//! - The same options in the plain (non-virtualized) menu for comparison
//! - Keyboard focus navigation (Up/Down/Enter) with scroll-into-view
//! - Theme switching and persisted menu configuration
//!
//! An optional first argument names a JSON menu config file.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use env_logger::Env;
use std::path::PathBuf;

mod app;

use app::{AppState, GeneratorSpec, MenuMode, SettingsCoordinator, ThemeCoordinator};
use rselect::{build_rows, MenuConfig, RowParams, SelectMenu, SelectableValue};

const MENU_MODE_KEY: &str = "menu_mode";

fn main() -> eframe::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let file_config = match MenuConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err:#}");
            MenuConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Select Menu Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Select Menu Demo",
        options,
        Box::new(move |cc| Ok(Box::new(SelectDemoApp::new(cc, file_config)))),
    )
}

/// The demo application.
struct SelectDemoApp {
    state: AppState,
    spec: GeneratorSpec,
    /// Appends the option value to every row label
    show_values: bool,
}

impl SelectDemoApp {
    /// Creates the app, preferring a config saved in eframe storage over the file config.
    fn new(cc: &eframe::CreationContext, file_config: MenuConfig) -> Self {
        let config = SettingsCoordinator::load_menu_config(cc.storage, file_config);
        let mode = SettingsCoordinator::load_setting_or(cc.storage, MENU_MODE_KEY, MenuMode::Virtualized);

        let spec = GeneratorSpec::default();
        let options = app::generate_options(&mut rand::thread_rng(), &spec);
        log::info!("generated {} top-level options", options.len());

        Self {
            state: AppState::new(options, config, mode),
            spec,
            show_values: false,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (down, up, enter) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::Enter),
            )
        });

        if down {
            self.state.move_focus(1);
        }
        if up {
            self.state.move_focus(-1);
        }
        if enter {
            self.state.select_focused();
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.state.mode, MenuMode::Virtualized, "Virtualized");
            ui.selectable_value(&mut self.state.mode, MenuMode::Plain, "Plain");

            ui.separator();

            let current = self.state.themes.current_theme_name().to_string();
            let names: Vec<String> = self.state.themes.list_themes().iter().map(|s| s.to_string()).collect();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    for name in names {
                        if ui.selectable_label(current == name, &name).clicked() {
                            ThemeCoordinator::switch_theme(&mut self.state, &name);
                        }
                    }
                });

            ui.separator();

            ui.checkbox(&mut self.show_values, "Show values");

            if ui.button("Regenerate").clicked() {
                let options = app::generate_options(&mut rand::thread_rng(), &self.spec);
                self.state.set_options(options);
            }
        });

        ui.horizontal(|ui| {
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut self.state.config.max_height, 0.0..=600.0).text("max height"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.state.config.overscan_rows, 0..=20).text("overscan"))
                .changed();
            if changed {
                self.state.apply_config();
            }
        });

        let selected = self
            .state
            .selected
            .map(|v| v.to_string())
            .unwrap_or_else(|| "nothing".to_string());
        ui.label(format!("Selected: {selected}   (Up/Down to move focus, Enter to pick)"));

        if let Some(error) = &self.state.error_message {
            ui.colored_label(ui.visuals().error_fg_color, error.as_str());
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        let colors = self.state.themes.current_colors();
        let with_value = |data: &SelectableValue<u64>| format!("{}  #{}", data.label_str(), data.value);
        let render_label: Option<&dyn Fn(&SelectableValue<u64>) -> String> =
            if self.show_values { Some(&with_value) } else { None };

        let clicked = {
            let state = &mut self.state;
            let params = RowParams {
                colors: &colors,
                focused: state.focused.as_ref(),
                selected: state.selected.as_ref(),
                item_height: state.config.item_height,
                show_description: state.mode == MenuMode::Plain,
                render_label,
            };
            let rows = build_rows(&state.options, &params);

            match state.mode {
                MenuMode::Virtualized => state
                    .menu
                    .show(ui, &state.options, &rows, state.focused.as_ref(), state.config.max_height)
                    .and_then(|output| output.clicked),
                MenuMode::Plain => SelectMenu::new("demo_plain_menu", &colors)
                    .max_height(state.config.max_height)
                    .show_children(ui, &rows)
                    .and_then(|output| output.inner),
            }
        };

        if let Some(row) = clicked {
            self.state.select_row(row);
        }
    }
}

impl eframe::App for SelectDemoApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_menu_config(storage, &self.state.config);
        SettingsCoordinator::save_setting(storage, MENU_MODE_KEY, &self.state.mode);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_menu(ui);
        });
    }
}
