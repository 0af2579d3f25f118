//! Action Dispatcher.
//!
//! Turns a parsed directive plus its extracted parameters into exactly one
//! transport strategy, and handles the completion of edit-dialog submissions.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::host::ShellHost;
use crate::managers::tab_manager::{TabSession, TabSessionTrait};
use crate::services::url_params::set_url_params;
use crate::types::dialog::{DialogRequest, EditDialogRequest, Envelope, SubmitOutcome};
use crate::types::directive::{ActionDescriptor, OpenType};
use crate::types::notice::{Notice, UNKNOWN_ERROR};
use crate::types::settings::ShellSettings;

/// Runs the strategy selected by `descriptor.open_type`.
pub fn dispatch<H: ShellHost + ?Sized>(
    descriptor: &ActionDescriptor,
    params: &str,
    session: &mut TabSession,
    settings: &ShellSettings,
    host: &mut H,
) -> OpenType {
    let url = descriptor.url.as_str();
    debug!(url, open_type = ?descriptor.open_type, params, "dispatching directive");

    match descriptor.open_type {
        OpenType::Tab => {
            session.open_or_activate(&descriptor.title, url, params, descriptor.no_close, host);
        }
        OpenType::NewWindow => host.open_window(&set_url_params(url, params)),
        OpenType::SelfWindow => host.replace_location(&set_url_params(url, params)),
        OpenType::Dialog => host.open_dialog(DialogRequest {
            title: descriptor.title.clone(),
            url: url.to_string(),
            params: params.to_string(),
            width: descriptor.width,
            height: descriptor.height,
        }),
        OpenType::EditDialog => host.open_edit_dialog(EditDialogRequest {
            title: descriptor.title.clone(),
            url: url.to_string(),
            params: params.to_string(),
            width: descriptor.width,
            height: descriptor.height,
            form_id: descriptor
                .edit_form_id
                .clone()
                .unwrap_or_else(|| settings.edit_form_id.clone()),
            submit_url: set_url_params(url, params),
        }),
        OpenType::Headless => host.post(url, params),
    }

    descriptor.open_type
}

/// Reacts to the end of an edit-form submission.
///
/// Success closes the open modals first so the success notice stays on
/// screen, then refreshes the configured table when the page has one. A
/// body that is not an envelope is shown as-is.
pub fn handle_submit<H: ShellHost + ?Sized>(
    outcome: SubmitOutcome,
    settings: &ShellSettings,
    host: &mut H,
) -> Option<Envelope> {
    let body = match outcome {
        SubmitOutcome::Response(body) => body,
        SubmitOutcome::TransportFailure => {
            warn!("edit form submission failed in transport");
            host.notice(Notice::error(UNKNOWN_ERROR));
            return None;
        }
    };

    let envelope = Envelope::classify(&body);
    match &envelope {
        Envelope::Parsed { code: 0, msg } => {
            host.close_all_modals();
            host.notice(Notice::success(msg.clone()));
            if host.has_grid(&settings.table_id) {
                host.refresh(&settings.table_id);
            }
        }
        Envelope::Parsed { code, msg } => {
            debug!(code, msg = %msg, "edit form rejected");
            host.notice(Notice::error(msg.clone()));
        }
        Envelope::Unparsed { raw } => host.notice(Notice::info(raw.clone())),
    }
    Some(envelope)
}

/// Prompts left unanswered beyond this many are dropped, oldest first.
pub const MAX_PENDING_CONFIRMS: usize = 64;

/// Outstanding confirm prompts, keyed by the token handed to the page.
///
/// Accepting a prompt removes it, so its action runs at most once no matter
/// how many times the page reports it as accepted.
#[derive(Debug, Default)]
pub struct ConfirmQueue {
    pending: BTreeMap<u64, ActionDescriptor>,
    next_token: u64,
}

impl ConfirmQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: ActionDescriptor) -> u64 {
        while self.pending.len() >= MAX_PENDING_CONFIRMS {
            if let Some((stale, _)) = self.pending.pop_first() {
                warn!(token = stale, "dropping unanswered confirm");
            }
        }
        self.next_token += 1;
        let token = self.next_token;
        self.pending.insert(token, descriptor);
        token
    }

    /// Returns the descriptor the first time `token` is accepted, `None` after.
    pub fn accept(&mut self, token: u64) -> Option<ActionDescriptor> {
        let descriptor = self.pending.remove(&token);
        if descriptor.is_none() {
            debug!(token, "ignoring unknown or repeated confirm");
        }
        descriptor
    }

    /// Drops a prompt the page closed without accepting it.
    pub fn dismiss(&mut self, token: u64) -> bool {
        self.pending.remove(&token).is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
