//! Admin console state managers.
//!
//! Managers own mutable shell state: the tab session and the side panel.

pub mod side_panel;
pub mod tab_manager;
