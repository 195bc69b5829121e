//! Application-level modules for the select menu demo.

mod app_state;
mod option_generator;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::{AppState, MenuMode};
pub use option_generator::{generate_options, GeneratorSpec};
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
