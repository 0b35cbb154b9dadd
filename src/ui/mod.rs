//! UI panel rendering subsystem
//!
//! - Header panel (font controls, label input)
//! - Label panel (resizable list of fitted labels)
//! - Status bar (label and abbreviation counts)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod label_panel;
pub mod status_bar;
pub mod panel_manager;
