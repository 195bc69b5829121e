//! Settings persistence through eframe storage.
//!
//! Values are stored as JSON strings. The menu config has its own key and
//! falls back to the file/default config when storage holds nothing usable.

use rselect::MenuConfig;
use serde::{Deserialize, Serialize};

const MENU_CONFIG_KEY: &str = "menu_config";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value used if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring stored setting '{key}': {err}");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Loads the menu config from storage, validating it.
    ///
    /// Invalid or missing stored configs yield `fallback`.
    pub fn load_menu_config(storage: Option<&dyn eframe::Storage>, fallback: MenuConfig) -> MenuConfig {
        match Self::try_load_setting::<MenuConfig>(storage, MENU_CONFIG_KEY) {
            Some(config) => match config.validate() {
                Ok(()) => config,
                Err(err) => {
                    log::warn!("stored menu config rejected: {err:#}");
                    fallback
                }
            },
            None => fallback,
        }
    }

    pub fn save_menu_config(storage: &mut dyn eframe::Storage, config: &MenuConfig) {
        Self::save_setting(storage, MENU_CONFIG_KEY, config);
    }
}
