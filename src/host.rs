//! Collaborator contracts the shell core drives.
//!
//! The core only makes decisions; rendering, transport and the modal layer
//! belong to the page. Each concern is a small trait so components can ask
//! for exactly what they use. [`PageHost`] implements all of them from a
//! snapshot of page state and records the resulting [`HostCommand`]s, which
//! is what the JSON-RPC bridge sends back to the page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::dialog::{DialogRequest, EditDialogRequest};
use crate::types::notice::Notice;
use crate::types::tab::{StripGeometry, TabSpec};

/// A grid row as the data-grid component reports it.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The underlying tab-strip widget.
pub trait TabStrip {
    fn add_tab(&mut self, spec: TabSpec);
    fn activate_tab(&mut self, id: &str);
    /// Programmatic close. Does not report back through the delete callback.
    fn close_tab(&mut self, id: &str);
    /// Removes several headers (and their frames) in one batch.
    fn remove_tabs(&mut self, ids: &[String]);
    fn set_offset(&mut self, offset: f64);
    fn geometry(&self) -> StripGeometry;
}

/// The data-grid component.
pub trait DataGrid {
    /// Checked rows in selection order, or `None` when the grid does not exist.
    fn checked_rows(&self, grid_id: &str) -> Option<Vec<Row>>;
    fn has_grid(&self, grid_id: &str) -> bool;
    fn refresh(&mut self, grid_id: &str);
}

/// Page forms.
pub trait FormSource {
    /// URL-encoded form fields, or `None` when the form does not exist.
    fn serialize_form(&self, form_id: &str) -> Option<String>;
}

/// Browsing-context navigation.
pub trait Navigator {
    fn open_window(&mut self, url: &str);
    fn replace_location(&mut self, url: &str);
}

/// HTTP transport. Completions come back through the shell.
pub trait Transport {
    fn open_dialog(&mut self, request: DialogRequest);
    fn open_edit_dialog(&mut self, request: EditDialogRequest);
    /// Fire-and-forget POST.
    fn post(&mut self, url: &str, params: &str);
}

/// Modal layer and tooltips.
pub trait Notifier {
    fn notice(&mut self, notice: Notice);
    fn confirm(&mut self, token: u64, text: &str);
    fn close_all_modals(&mut self);
    fn show_tip(&mut self, text: &str);
    fn hide_tip(&mut self);
}

/// Shell chrome outside the tab strip: navigation menu and side panel classes.
pub trait ShellChrome {
    /// The active tab's key changed; the menu highlights the matching item.
    fn active_key_changed(&mut self, key: &str);
    /// Swap the flexible icon and the container's shrink class.
    fn set_side_spread(&mut self, spread: bool);
}

/// Everything the shell needs from its page.
pub trait ShellHost: TabStrip + DataGrid + FormSource + Navigator + Transport + Notifier + ShellChrome {}

impl<T> ShellHost for T where
    T: TabStrip + DataGrid + FormSource + Navigator + Transport + Notifier + ShellChrome
{
}

/// One instruction for the page, in the order the core issued it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HostCommand {
    AddTab(TabSpec),
    ActivateTab { id: String },
    CloseTab { id: String },
    RemoveTabs { ids: Vec<String> },
    SetStripOffset { offset: f64 },
    OpenWindow { url: String },
    ReplaceLocation { url: String },
    OpenDialog(DialogRequest),
    OpenEditDialog(EditDialogRequest),
    Post { url: String, params: String },
    Notice(Notice),
    Confirm { token: u64, text: String },
    CloseAllModals,
    RefreshTable { grid_id: String },
    ShowTip { text: String },
    HideTip,
    ActiveKeyChanged { key: String },
    SetSideSpread { spread: bool },
}

/// Page state the host reports alongside an event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageSnapshot {
    pub strip: StripGeometry,
    /// Checked rows per grid id. A grid present with no rows has an empty list.
    pub grids: HashMap<String, Vec<Row>>,
    /// Serialized form data per form id.
    pub forms: HashMap<String, String>,
}

/// Snapshot-backed host that records every command it is given.
#[derive(Debug, Default)]
pub struct PageHost {
    snapshot: PageSnapshot,
    commands: Vec<HostCommand>,
}

impl PageHost {
    pub fn new(snapshot: PageSnapshot) -> Self {
        Self {
            snapshot,
            commands: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &PageSnapshot {
        &self.snapshot
    }

    pub fn snapshot_mut(&mut self) -> &mut PageSnapshot {
        &mut self.snapshot
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Drains the recorded commands, leaving the snapshot in place.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All notices issued so far.
    pub fn notices(&self) -> Vec<&Notice> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                HostCommand::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, command: HostCommand) {
        self.commands.push(command);
    }
}

impl TabStrip for PageHost {
    fn add_tab(&mut self, spec: TabSpec) {
        self.push(HostCommand::AddTab(spec));
    }

    fn activate_tab(&mut self, id: &str) {
        self.push(HostCommand::ActivateTab { id: id.to_string() });
    }

    fn close_tab(&mut self, id: &str) {
        self.push(HostCommand::CloseTab { id: id.to_string() });
    }

    fn remove_tabs(&mut self, ids: &[String]) {
        self.push(HostCommand::RemoveTabs { ids: ids.to_vec() });
    }

    fn set_offset(&mut self, offset: f64) {
        self.snapshot.strip.offset = offset;
        self.push(HostCommand::SetStripOffset { offset });
    }

    fn geometry(&self) -> StripGeometry {
        self.snapshot.strip.clone()
    }
}

impl DataGrid for PageHost {
    fn checked_rows(&self, grid_id: &str) -> Option<Vec<Row>> {
        self.snapshot.grids.get(grid_id).cloned()
    }

    fn has_grid(&self, grid_id: &str) -> bool {
        self.snapshot.grids.contains_key(grid_id)
    }

    fn refresh(&mut self, grid_id: &str) {
        self.push(HostCommand::RefreshTable {
            grid_id: grid_id.to_string(),
        });
    }
}

impl FormSource for PageHost {
    fn serialize_form(&self, form_id: &str) -> Option<String> {
        self.snapshot.forms.get(form_id).cloned()
    }
}

impl Navigator for PageHost {
    fn open_window(&mut self, url: &str) {
        self.push(HostCommand::OpenWindow { url: url.to_string() });
    }

    fn replace_location(&mut self, url: &str) {
        self.push(HostCommand::ReplaceLocation { url: url.to_string() });
    }
}

impl Transport for PageHost {
    fn open_dialog(&mut self, request: DialogRequest) {
        self.push(HostCommand::OpenDialog(request));
    }

    fn open_edit_dialog(&mut self, request: EditDialogRequest) {
        self.push(HostCommand::OpenEditDialog(request));
    }

    fn post(&mut self, url: &str, params: &str) {
        self.push(HostCommand::Post {
            url: url.to_string(),
            params: params.to_string(),
        });
    }
}

impl Notifier for PageHost {
    fn notice(&mut self, notice: Notice) {
        self.push(HostCommand::Notice(notice));
    }

    fn confirm(&mut self, token: u64, text: &str) {
        self.push(HostCommand::Confirm {
            token,
            text: text.to_string(),
        });
    }

    fn close_all_modals(&mut self) {
        self.push(HostCommand::CloseAllModals);
    }

    fn show_tip(&mut self, text: &str) {
        self.push(HostCommand::ShowTip { text: text.to_string() });
    }

    fn hide_tip(&mut self) {
        self.push(HostCommand::HideTip);
    }
}

impl ShellChrome for PageHost {
    fn active_key_changed(&mut self, key: &str) {
        self.push(HostCommand::ActiveKeyChanged { key: key.to_string() });
    }

    fn set_side_spread(&mut self, spread: bool) {
        self.push(HostCommand::SetSideSpread { spread });
    }
}
