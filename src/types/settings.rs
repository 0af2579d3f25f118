use serde::{Deserialize, Serialize};

/// Top-level console shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    /// Form submitted by edit dialogs when a directive names none.
    pub edit_form_id: String,
    /// Form serialized for search-form parameters when a directive names none.
    pub search_form_id: String,
    /// Grid read for row parameters (and refreshed after edits) by default.
    pub table_id: String,
    /// Row field used as the primary key in `pk=<value>` parameters.
    pub pk_field: String,
    /// Tab title used when neither the directive nor the element provides one.
    pub default_tab_title: String,
    pub home: HomeTab,
    pub dialog: DialogSettings,
    pub side: SideSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            edit_form_id: "edit_form".to_string(),
            search_form_id: "search_form".to_string(),
            table_id: "main_table".to_string(),
            pk_field: "id".to_string(),
            default_tab_title: "New Tab".to_string(),
            home: HomeTab::default(),
            dialog: DialogSettings::default(),
            side: SideSettings::default(),
        }
    }
}

/// The implicit first tab that exists from shell start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HomeTab {
    pub title: String,
    pub url: String,
    pub pinned: bool,
}

impl Default for HomeTab {
    fn default() -> Self {
        Self {
            title: "Home".to_string(),
            url: "/admin/home".to_string(),
            pinned: true,
        }
    }
}

/// Default modal size in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DialogSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Side panel behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SideSettings {
    /// Viewports this wide or narrower count as minimized.
    pub min_width_threshold: u32,
    /// Start in automatic mode (collapse/expand follows the viewport).
    pub auto: bool,
}

impl Default for SideSettings {
    fn default() -> Self {
        Self {
            min_width_threshold: 992,
            auto: true,
        }
    }
}
