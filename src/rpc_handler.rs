//! RPC method handler for the admin console JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested directly. Every
//! page event arrives as a method call carrying a `page` snapshot (tab strip
//! geometry, checked grid rows, serialized forms). The reply lists the
//! commands the page must apply, in order, under `commands`.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::app::{Console, LinkOutcome, ShellEvent};
use crate::host::{HostCommand, PageHost, PageSnapshot};
use crate::services::directive_parser::DirectiveSource;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::dialog::{Envelope, SubmitOutcome};
use crate::types::directive::Element;

fn field<T: DeserializeOwned>(params: &Value, name: &str) -> Result<T, String> {
    let raw = params.get(name).cloned().ok_or(format!("missing {}", name))?;
    serde_json::from_value(raw).map_err(|e| format!("invalid {}: {}", name, e))
}

fn page_host(params: &Value) -> Result<PageHost, String> {
    let snapshot = match params.get("page") {
        Some(v) => serde_json::from_value::<PageSnapshot>(v.clone())
            .map_err(|e| format!("invalid page: {}", e))?,
        None => PageSnapshot::default(),
    };
    Ok(PageHost::new(snapshot))
}

fn outcome_json(outcome: &LinkOutcome) -> Value {
    match outcome {
        LinkOutcome::Dispatched(open_type) => json!({"outcome": "dispatched", "open_type": open_type}),
        LinkOutcome::Script(key) => json!({"outcome": "script", "action": key}),
        LinkOutcome::AwaitingConfirm(token) => json!({"outcome": "awaiting_confirm", "token": token}),
        LinkOutcome::Aborted => json!({"outcome": "aborted"}),
    }
}

fn reply(mut body: Value, commands: Vec<HostCommand>) -> Result<Value, String> {
    let commands = serde_json::to_value(commands).map_err(|e| e.to_string())?;
    match body.as_object_mut() {
        Some(map) => {
            map.insert("commands".to_string(), commands);
            Ok(body)
        }
        None => Ok(json!({"result": body, "commands": commands})),
    }
}

/// Dispatch a JSON-RPC method call to the shell.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(console: &Mutex<Console>, method: &str, params: &Value) -> Result<Value, String> {
    let mut host = page_host(params)?;
    let mut c = console.lock().map_err(|e| e.to_string())?;

    let body = match method {
        "ping" => json!({"pong": true}),

        // ─── State ───
        "shell.state" => serde_json::to_value(c.shell.state()).map_err(|e| e.to_string())?,

        // ─── Directives ───
        "link.click" => {
            let element: Element = field(params, "element")?;
            let outcome = c.shell.open_link(&element, &mut host);
            outcome_json(&outcome)
        }
        "link.defaultOpen" => {
            let elements: Vec<Element> = field(params, "elements")?;
            let sources: Vec<&dyn DirectiveSource> =
                elements.iter().map(|e| e as &dyn DirectiveSource).collect();
            let outcomes = c.shell.open_defaults(&sources, &mut host);
            json!({"outcomes": outcomes.iter().map(outcome_json).collect::<Vec<_>>()})
        }
        "confirm.accept" => {
            let token: u64 = field(params, "token")?;
            match c.shell.accept_confirm(token, &mut host) {
                Some(outcome) => outcome_json(&outcome),
                None => json!({"outcome": "ignored"}),
            }
        }
        "confirm.dismiss" => {
            let token: u64 = field(params, "token")?;
            json!({"ok": c.shell.dismiss_confirm(token)})
        }
        "event.trigger" => {
            let name: String = field(params, "name")?;
            match name.parse::<ShellEvent>() {
                Ok(event) => {
                    c.shell.trigger_event(event, &mut host);
                    json!({"ok": true})
                }
                Err(_) => json!({"ok": false}),
            }
        }

        // ─── Tab strip callbacks ───
        "tab.switched" => {
            let index: usize = field(params, "index")?;
            c.shell.on_tab_switched(index, &mut host).map_err(|e| e.to_string())?;
            json!({"current_index": c.shell.session.current_index()})
        }
        "tab.deleted" => {
            let index: usize = field(params, "index")?;
            c.shell.on_tab_deleted(index).map_err(|e| e.to_string())?;
            json!({"current_index": c.shell.session.current_index()})
        }

        // ─── Side panel ───
        "window.resized" => {
            let width: u32 = field(params, "width")?;
            let top_level = params.get("top_level").and_then(|v| v.as_bool()).unwrap_or(true);
            let changed = c.shell.on_resize(width, top_level, &mut host);
            json!({"changed": changed, "spread": c.shell.side.is_spread()})
        }
        "menu.groupClick" => {
            let changed = c.shell.side.on_menu_group_click(&mut host);
            json!({"changed": changed})
        }
        "menu.groupEnter" => {
            let text: String = field(params, "text")?;
            let shown = c.shell.side.on_menu_group_enter(&text, &mut host);
            json!({"shown": shown})
        }
        "menu.groupLeave" => {
            c.shell.side.on_menu_group_leave(&mut host);
            json!({"ok": true})
        }

        // ─── Edit dialog completion ───
        "dialog.submitted" => {
            let failed = params.get("failed").and_then(|v| v.as_bool()).unwrap_or(false);
            let outcome = match params.get("body") {
                _ if failed => SubmitOutcome::TransportFailure,
                None | Some(Value::Null) => SubmitOutcome::TransportFailure,
                Some(Value::String(body)) => SubmitOutcome::Response(body.clone()),
                // Already-parsed JSON forwarded by the page.
                Some(other) => SubmitOutcome::Response(other.to_string()),
            };
            match c.shell.on_edit_submitted(outcome, &mut host) {
                Some(Envelope::Parsed { code, msg }) => json!({"parsed": true, "code": code, "msg": msg}),
                Some(Envelope::Unparsed { .. }) => json!({"parsed": false}),
                None => json!({"failed": true}),
            }
        }

        // ─── Settings ───
        "settings.get" => {
            serde_json::to_value(c.settings_engine.get_settings()).map_err(|e| e.to_string())?
        }
        "settings.set" => {
            let key: String = field(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            c.set_setting(&key, value).map_err(|e| e.to_string())?;
            json!({"ok": true})
        }

        _ => return Err(format!("unknown method: {}", method)),
    };

    reply(body, host.take_commands())
}
