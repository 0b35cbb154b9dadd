//! Application-level modules for the label demo.
//!
//! Centralized state and settings persistence.

mod app_state;
mod settings_coordinator;

pub use app_state::{AppState, DEFAULT_LABELS};
pub use settings_coordinator::SettingsCoordinator;
