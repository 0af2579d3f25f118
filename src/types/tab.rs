use serde::{Deserialize, Serialize};

/// One open content tab in the console's tab strip.
///
/// The `key` is the fully-qualified resource URL (query included). It is
/// unique across open tabs and doubles as the strip widget's tab id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabEntry {
    pub key: String,
    pub title: String,
    pub pinned: bool,
}

impl TabEntry {
    pub fn new(key: impl Into<String>, title: impl Into<String>, pinned: bool) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            pinned,
        }
    }
}

/// What the tab-strip widget needs to render a new tab header and its frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSpec {
    pub title: String,
    pub id: String,
    pub content_url: String,
}

/// Horizontal box of one rendered tab header, relative to the strip's origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct TabBox {
    pub left: f64,
    pub width: f64,
}

impl TabBox {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Geometry of the tab strip as currently rendered.
///
/// `offset` is how far the strip is scrolled to the left (always >= 0); the
/// visible window is `[offset, offset + visible_width]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StripGeometry {
    pub visible_width: f64,
    #[serde(default)]
    pub offset: f64,
    #[serde(default)]
    pub tabs: Vec<TabBox>,
}

impl StripGeometry {
    /// Lays tabs out edge to edge starting at 0.
    pub fn from_widths(visible_width: f64, offset: f64, widths: &[f64]) -> Self {
        let mut left = 0.0;
        let tabs = widths
            .iter()
            .map(|&width| {
                let tab = TabBox { left, width };
                left += width;
                tab
            })
            .collect();
        Self {
            visible_width,
            offset,
            tabs,
        }
    }

    /// True when the tab at `index` lies fully inside the visible window.
    pub fn is_visible(&self, index: usize) -> bool {
        match self.tabs.get(index) {
            Some(tab) => tab.left >= self.offset && tab.right() <= self.offset + self.visible_width,
            None => false,
        }
    }
}
