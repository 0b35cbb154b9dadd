//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting demo settings (labels, font, panel
//! width) to eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => warn!(key, %err, "failed to serialize setting"),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting and falls back to `default` when the stored value
    /// deserializes but fails `is_valid`.
    pub fn load_setting_checked<T, F>(storage: Option<&dyn eframe::Storage>, key: &str, default: T, is_valid: F) -> T
    where
        T: for<'de> Deserialize<'de>,
        F: FnOnce(&T) -> bool,
    {
        match Self::try_load_setting(storage, key) {
            Some(value) if is_valid(&value) => value,
            Some(_) => {
                warn!(key, "ignoring out-of-range stored setting");
                default
            }
            None => default,
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// Invalid stored values are logged and ignored.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "ignoring invalid stored setting");
                None
            }
        }
    }
}
