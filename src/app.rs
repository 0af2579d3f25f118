//! Console shell core.
//!
//! [`Shell`] owns the tab session, the side panel, the settings and the
//! script action registry, and turns page events into decisions applied
//! through a [`ShellHost`]. Construct it once at startup and pass it around
//! by reference; there is no global instance.

use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::host::ShellHost;
use crate::managers::side_panel::SidePanel;
use crate::managers::tab_manager::{CloseMode, TabSession, TabSessionTrait};
use crate::services::action_dispatcher::{self, ConfirmQueue};
use crate::services::action_registry::ActionRegistry;
use crate::services::directive_parser::{self, DirectiveSource, ATTR_DEFAULT_OPEN, ATTR_EVENT};
use crate::services::param_extractor;
use crate::services::scroll_engine::ScrollMode;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::dialog::{Envelope, SubmitOutcome};
use crate::types::directive::{ActionDescriptor, LinkType, OpenType};
use crate::types::errors::{DirectiveError, SettingsError, ShellError, TabError};
use crate::types::notice::Notice;
use crate::types::settings::ShellSettings;
use crate::types::tab::TabEntry;

/// What happened to a clicked directive.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    /// A transport strategy ran.
    Dispatched(OpenType),
    /// A registered script action ran.
    Script(String),
    /// A confirm prompt is showing; the action runs when it is accepted.
    AwaitingConfirm(u64),
    /// The action was abandoned and a notice shown.
    Aborted,
}

/// Named console events carried by the `admin-event` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Full-screen toggle; purely visual, handled by the page.
    FullScreen,
    /// Manual side panel toggle.
    Flexible,
    LeftPage,
    RightPage,
    CloseThisTabs,
    CloseOtherTabs,
    CloseAllTabs,
}

impl FromStr for ShellEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fullScreen" => Ok(ShellEvent::FullScreen),
            "flexible" => Ok(ShellEvent::Flexible),
            "leftPage" => Ok(ShellEvent::LeftPage),
            "rightPage" => Ok(ShellEvent::RightPage),
            "closeThisTabs" => Ok(ShellEvent::CloseThisTabs),
            "closeOtherTabs" => Ok(ShellEvent::CloseOtherTabs),
            "closeAllTabs" => Ok(ShellEvent::CloseAllTabs),
            other => Err(format!("unknown shell event: {}", other)),
        }
    }
}

/// Read-only view of the shell for the page and for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ShellState<'a> {
    pub tabs: &'a [TabEntry],
    pub current_index: usize,
    pub side: &'a SidePanel,
    pub pending_confirms: usize,
}

/// The console shell: one per page.
#[derive(Debug)]
pub struct Shell {
    pub settings: ShellSettings,
    pub session: TabSession,
    pub side: SidePanel,
    pub actions: ActionRegistry,
    confirms: ConfirmQueue,
}

impl Shell {
    pub fn new(settings: ShellSettings) -> Self {
        let session = TabSession::from_settings(&settings);
        let side = SidePanel::new(&settings.side);
        Self {
            settings,
            session,
            side,
            actions: ActionRegistry::new(),
            confirms: ConfirmQueue::new(),
        }
    }

    /// Swaps in new settings. Open tabs and the side panel state are kept.
    pub fn apply_settings(&mut self, settings: ShellSettings) {
        self.session.set_default_title(settings.default_tab_title.clone());
        self.side.set_threshold(settings.side.min_width_threshold);
        self.settings = settings;
    }

    pub fn state(&self) -> ShellState<'_> {
        ShellState {
            tabs: self.session.entries(),
            current_index: self.session.current_index(),
            side: &self.side,
            pending_confirms: self.confirms.len(),
        }
    }

    /// Handles a click on an element carrying `admin-href`.
    ///
    /// Failures become notices; session state is left as it was.
    pub fn open_link<H: ShellHost>(&mut self, el: &dyn DirectiveSource, host: &mut H) -> LinkOutcome {
        let descriptor = match directive_parser::parse(el, &self.settings) {
            Ok(d) => d,
            Err(e) => return self.abort(e.into(), host),
        };

        if let Some(text) = descriptor.confirm_text.clone() {
            let token = self.confirms.push(descriptor);
            host.confirm(token, &text);
            debug!(token, "awaiting confirm");
            return LinkOutcome::AwaitingConfirm(token);
        }

        self.execute(descriptor, host)
    }

    /// The page reports the confirm prompt `token` was accepted.
    /// Runs the action the first time only.
    pub fn accept_confirm<H: ShellHost>(&mut self, token: u64, host: &mut H) -> Option<LinkOutcome> {
        let descriptor = self.confirms.accept(token)?;
        Some(self.execute(descriptor, host))
    }

    /// The page closed confirm prompt `token` (cancelled or done).
    pub fn dismiss_confirm(&mut self, token: u64) -> bool {
        self.confirms.dismiss(token)
    }

    /// Clicks every `admin-default-open` element in order, as at page load.
    pub fn open_defaults<H: ShellHost>(&mut self, elements: &[&dyn DirectiveSource], host: &mut H) -> Vec<LinkOutcome> {
        elements
            .iter()
            .filter(|el| el.has_attr(ATTR_DEFAULT_OPEN))
            .map(|el| self.open_link(*el, host))
            .collect()
    }

    /// Handles a click on an element carrying `admin-event`. Unknown names are ignored.
    pub fn trigger_event_attr<H: ShellHost>(&mut self, el: &dyn DirectiveSource, host: &mut H) -> Option<ShellEvent> {
        let event = el.attr(ATTR_EVENT)?.parse::<ShellEvent>().ok()?;
        self.trigger_event(event, host);
        Some(event)
    }

    pub fn trigger_event<H: ShellHost + ?Sized>(&mut self, event: ShellEvent, host: &mut H) {
        debug!(?event, "shell event");
        match event {
            ShellEvent::FullScreen => {}
            ShellEvent::Flexible => self.side.toggle(host),
            ShellEvent::LeftPage => {
                self.session.scroll(ScrollMode::Left, host);
            }
            ShellEvent::RightPage => {
                self.session.scroll(ScrollMode::Right, host);
            }
            ShellEvent::CloseThisTabs => {
                self.session.close_current(host);
            }
            ShellEvent::CloseOtherTabs => {
                self.session.close_others(CloseMode::OthersOnly, host);
            }
            ShellEvent::CloseAllTabs => {
                self.session.close_others(CloseMode::All, host);
            }
        }
    }

    /// Tab strip `onSwitch` callback.
    pub fn on_tab_switched<H: ShellHost>(&mut self, index: usize, host: &mut H) -> Result<(), TabError> {
        self.session.on_external_index_change(index, host)
    }

    /// Tab strip `onDelete` callback.
    pub fn on_tab_deleted(&mut self, index: usize) -> Result<(), TabError> {
        self.session.on_external_delete(index)
    }

    /// Window resize.
    pub fn on_resize<H: ShellHost>(&mut self, viewport_width: u32, is_top_level: bool, host: &mut H) -> bool {
        self.side.auto_adjust(viewport_width, is_top_level, host)
    }

    /// Completion of an edit dialog's form submission.
    pub fn on_edit_submitted<H: ShellHost>(&mut self, outcome: SubmitOutcome, host: &mut H) -> Option<Envelope> {
        action_dispatcher::handle_submit(outcome, &self.settings, host)
    }

    fn execute<H: ShellHost>(&mut self, descriptor: ActionDescriptor, host: &mut H) -> LinkOutcome {
        match descriptor.link_type {
            LinkType::Script => self.run_script(&descriptor.url, host),
            LinkType::Link => {
                let params = match param_extractor::extract(
                    descriptor.param_type,
                    descriptor.param_source_id.as_deref(),
                    &self.settings,
                    &*host,
                ) {
                    Ok(p) => p,
                    Err(e) => return self.abort(e.into(), host),
                };
                let open_type =
                    action_dispatcher::dispatch(&descriptor, &params, &mut self.session, &self.settings, host);
                LinkOutcome::Dispatched(open_type)
            }
        }
    }

    fn run_script<H: ShellHost>(&mut self, key: &str, host: &mut H) -> LinkOutcome {
        match self.actions.get(key) {
            Some(action) => {
                action(self, host);
                LinkOutcome::Script(key.to_string())
            }
            None => self.abort(DirectiveError::UnknownAction(key.to_string()).into(), host),
        }
    }

    fn abort<H: ShellHost + ?Sized>(&self, err: ShellError, host: &mut H) -> LinkOutcome {
        warn!(error = %err, "link aborted");
        host.notice(Notice::from_error(&err));
        LinkOutcome::Aborted
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellSettings::default())
    }
}

/// A shell together with the engine that persists its settings.
pub struct Console {
    pub shell: Shell,
    pub settings_engine: SettingsEngine,
}

impl Console {
    /// Loads settings (defaults when the file is absent) and starts the shell.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;
        Ok(Self {
            shell: Shell::new(settings),
            settings_engine,
        })
    }

    /// Updates one setting, persists it and applies it to the running shell.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        self.shell
            .apply_settings(self.settings_engine.get_settings().clone());
        Ok(())
    }
}
