use tracing::debug;

use crate::host::{ShellChrome, TabStrip};
use crate::services::scroll_engine::{self, ScrollMode};
use crate::services::url_params::set_url_params;
use crate::types::errors::TabError;
use crate::types::settings::ShellSettings;
use crate::types::tab::{TabEntry, TabSpec};

/// Which tabs a bulk close removes. Pinned tabs always survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseMode {
    /// Every unpinned tab.
    All,
    /// Every unpinned tab except the current one.
    OthersOnly,
}

/// Trait defining the tab session interface.
pub trait TabSessionTrait {
    fn open_or_activate<S: TabStrip + ?Sized>(
        &mut self,
        title: &str,
        url: &str,
        params: &str,
        no_close: bool,
        strip: &mut S,
    ) -> usize;
    fn close_current<S: TabStrip + ?Sized>(&mut self, strip: &mut S) -> bool;
    fn close_others<S: TabStrip + ?Sized>(&mut self, mode: CloseMode, strip: &mut S) -> usize;
    fn on_external_index_change<H: TabStrip + ShellChrome + ?Sized>(
        &mut self,
        new_index: usize,
        host: &mut H,
    ) -> Result<(), TabError>;
    fn on_external_delete(&mut self, deleted_index: usize) -> Result<(), TabError>;
    fn scroll<S: TabStrip + ?Sized>(&self, mode: ScrollMode, strip: &mut S) -> Option<f64>;
}

/// The console's open tabs, in strip order, plus the active index.
///
/// Entry order always matches the rendered left-to-right order, and
/// `current_index` stays in bounds whenever there is at least one entry.
#[derive(Debug, Clone)]
pub struct TabSession {
    entries: Vec<TabEntry>,
    current_index: usize,
    default_title: String,
}

impl TabSession {
    /// Starts a session holding only `home` at index 0.
    pub fn new(home: TabEntry, default_title: impl Into<String>) -> Self {
        Self {
            entries: vec![home],
            current_index: 0,
            default_title: default_title.into(),
        }
    }

    pub fn from_settings(settings: &ShellSettings) -> Self {
        let home = &settings.home;
        Self::new(
            TabEntry::new(home.url.clone(), home.title.clone(), home.pinned),
            settings.default_tab_title.clone(),
        )
    }

    /// Title used for tabs opened without one from now on.
    pub fn set_default_title(&mut self, title: impl Into<String>) {
        self.default_title = title.into();
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&TabEntry> {
        self.entries.get(self.current_index)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    fn clamp_index(&mut self) {
        if self.current_index >= self.entries.len() {
            self.current_index = self.entries.len().saturating_sub(1);
        }
    }

    fn activate_current<S: TabStrip + ?Sized>(&self, strip: &mut S) {
        if let Some(entry) = self.current() {
            strip.activate_tab(&entry.key);
            self.scroll(ScrollMode::Auto(self.current_index), strip);
        }
    }
}

impl TabSessionTrait for TabSession {
    /// Activates the tab for `url` + `params`, appending it first if it is not open.
    /// Returns the index of the now-active entry.
    fn open_or_activate<S: TabStrip + ?Sized>(
        &mut self,
        title: &str,
        url: &str,
        params: &str,
        no_close: bool,
        strip: &mut S,
    ) -> usize {
        let key = set_url_params(url, params);

        match self.position(&key) {
            Some(index) => {
                debug!(key = %key, index, "reusing open tab");
                self.current_index = index;
            }
            None => {
                let title = match title.trim() {
                    "" => self.default_title.clone(),
                    t => t.to_string(),
                };
                strip.add_tab(TabSpec {
                    title: title.clone(),
                    id: key.clone(),
                    content_url: key.clone(),
                });
                self.entries.push(TabEntry::new(key.clone(), title, no_close));
                self.current_index = self.entries.len() - 1;
                debug!(key = %key, index = self.current_index, pinned = no_close, "opened tab");
            }
        }

        self.activate_current(strip);
        self.current_index
    }

    /// Closes the active tab unless it is the first tab or pinned.
    fn close_current<S: TabStrip + ?Sized>(&mut self, strip: &mut S) -> bool {
        if self.current_index == 0 {
            return false;
        }
        let Some(entry) = self.current() else {
            return false;
        };
        if entry.pinned {
            return false;
        }

        let removed = self.entries.remove(self.current_index);
        strip.close_tab(&removed.key);
        self.clamp_index();
        debug!(key = %removed.key, index = self.current_index, "closed current tab");
        self.activate_current(strip);
        true
    }

    /// Removes every unpinned tab (keeping the current one in `OthersOnly`
    /// mode), resets the strip scroll, and returns how many tabs were removed.
    fn close_others<S: TabStrip + ?Sized>(&mut self, mode: CloseMode, strip: &mut S) -> usize {
        let current = self.current_index;
        let mut survivors_before = 0usize;
        let mut kept = Vec::with_capacity(self.entries.len());
        let mut removed = Vec::new();

        for (index, entry) in self.entries.drain(..).enumerate() {
            if entry.pinned {
                if index < current || (index == current && mode == CloseMode::All) {
                    survivors_before += 1;
                }
                kept.push(entry);
            } else if mode == CloseMode::OthersOnly && index == current {
                kept.push(entry);
            } else {
                removed.push(entry.key);
            }
        }
        self.entries = kept;

        if !removed.is_empty() {
            strip.remove_tabs(&removed);
        }
        strip.set_offset(0.0);

        match mode {
            CloseMode::All => {
                self.current_index = survivors_before.saturating_sub(1);
                self.clamp_index();
                if let Some(entry) = self.current() {
                    strip.activate_tab(&entry.key);
                }
            }
            CloseMode::OthersOnly => {
                self.current_index = survivors_before;
                self.clamp_index();
            }
        }

        debug!(removed = removed.len(), index = self.current_index, ?mode, "bulk close");
        removed.len()
    }

    /// The strip switched tabs on its own (user click on a header).
    fn on_external_index_change<H: TabStrip + ShellChrome + ?Sized>(
        &mut self,
        new_index: usize,
        host: &mut H,
    ) -> Result<(), TabError> {
        let key = self
            .entries
            .get(new_index)
            .map(|e| e.key.clone())
            .ok_or(TabError::InvalidIndex(new_index))?;
        self.current_index = new_index;
        self.scroll(ScrollMode::Auto(new_index), host);
        host.active_key_changed(&key);
        Ok(())
    }

    /// The strip deleted a tab through its own close button.
    ///
    /// The widget reports the post-delete active index one too high when the
    /// deleted tab sat left of the active one; this is the only place that
    /// compensates for it.
    fn on_external_delete(&mut self, deleted_index: usize) -> Result<(), TabError> {
        if deleted_index >= self.entries.len() {
            return Err(TabError::InvalidIndex(deleted_index));
        }
        let removed = self.entries.remove(deleted_index);
        if deleted_index < self.current_index {
            self.current_index -= 1;
        }
        self.clamp_index();
        debug!(key = %removed.key, index = self.current_index, "strip deleted tab");
        Ok(())
    }

    /// Applies a scroll of the strip and returns the new offset if it moved.
    fn scroll<S: TabStrip + ?Sized>(&self, mode: ScrollMode, strip: &mut S) -> Option<f64> {
        let offset = scroll_engine::compute(mode, &strip.geometry())?;
        strip.set_offset(offset);
        Some(offset)
    }
}
