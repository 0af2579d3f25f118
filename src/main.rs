//! Admin console demo mode.
//!
//! Drives a scripted session against a snapshot-backed page host and prints
//! the commands the shell issues. The real page talks to `admin-console-rpc`.

use admin_console::app::{Shell, ShellEvent};
use admin_console::host::{HostCommand, PageHost, PageSnapshot};
use admin_console::types::dialog::SubmitOutcome;
use admin_console::types::directive::Element;
use admin_console::types::settings::ShellSettings;
use admin_console::types::tab::{StripGeometry, TabBox};

const TAB_WIDTH: f64 = 120.0;

fn section(name: &str) {
    println!("── {} ──", name);
}

fn print_commands(host: &mut PageHost) {
    for command in host.take_commands() {
        println!("  → {}", serde_json::to_string(&command).unwrap_or_default());
    }
}

/// Mirrors what the tab-strip widget would render for the commands so far.
fn sync_strip(shell: &Shell, host: &mut PageHost) {
    let tabs = (0..shell.session.len())
        .map(|i| TabBox { left: i as f64 * TAB_WIDTH, width: TAB_WIDTH })
        .collect();
    let strip = &mut host.snapshot_mut().strip;
    strip.tabs = tabs;
}

fn main() {
    println!();
    println!("Admin Console v{}: Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut shell = Shell::new(ShellSettings::default());
    let mut snapshot = PageSnapshot {
        strip: StripGeometry { visible_width: 400.0, offset: 0.0, tabs: Vec::new() },
        ..PageSnapshot::default()
    };
    snapshot.grids.insert(
        "main_table".to_string(),
        vec![serde_json::json!({"id": 7, "name": "alice"})
            .as_object()
            .cloned()
            .unwrap_or_default()],
    );
    let mut host = PageHost::new(snapshot);
    sync_strip(&shell, &mut host);

    section("Open tabs");
    for (title, href) in [("Users", "/admin/user/list"), ("Roles", "/admin/role/list"), ("Logs", "/admin/log/list"), ("Menus", "/admin/menu/list")] {
        let el = Element::new(title).with_attr("admin-href", href);
        shell.open_link(&el, &mut host);
        sync_strip(&shell, &mut host);
        let index = shell.session.current_index();
        let _ = shell.on_tab_switched(index, &mut host);
    }
    print_commands(&mut host);
    println!("  {} tabs open, current = {}", shell.session.len(), shell.session.current_index());
    println!();

    section("Re-open an existing tab");
    let el = Element::new("Users").with_attr("admin-href", "/admin/user/list");
    shell.open_link(&el, &mut host);
    print_commands(&mut host);
    println!("  {} tabs open, current = {}", shell.session.len(), shell.session.current_index());
    println!();

    section("Edit dialog with a single selected row");
    let el = Element::new("Edit user")
        .with_attr("admin-href", "/admin/user/edit")
        .with_attr("open-type", "4")
        .with_attr("param-type", "2");
    shell.open_link(&el, &mut host);
    shell.on_edit_submitted(SubmitOutcome::Response(r#"{"code":0,"msg":"saved"}"#.to_string()), &mut host);
    print_commands(&mut host);
    println!();

    section("Confirmed headless delete");
    let el = Element::new("Delete")
        .with_attr("admin-href", "/admin/user/delete")
        .with_attr("open-type", "5")
        .with_attr("param-type", "3")
        .with_attr("confirm", "Delete the selected users?");
    if let admin_console::app::LinkOutcome::AwaitingConfirm(token) = shell.open_link(&el, &mut host) {
        shell.accept_confirm(token, &mut host);
        shell.accept_confirm(token, &mut host);
        shell.dismiss_confirm(token);
    }
    let posts = host
        .commands()
        .iter()
        .filter(|c| matches!(c, HostCommand::Post { .. }))
        .count();
    print_commands(&mut host);
    println!("  POSTs issued: {}", posts);
    println!();

    section("Close other tabs");
    shell.trigger_event(ShellEvent::CloseOtherTabs, &mut host);
    print_commands(&mut host);
    println!("  {} tabs open, current = {}", shell.session.len(), shell.session.current_index());
    println!();

    section("Side panel");
    shell.on_resize(800, true, &mut host);
    shell.on_resize(780, true, &mut host);
    shell.on_resize(1280, true, &mut host);
    print_commands(&mut host);
    println!("  spread = {}", shell.side.is_spread());
    println!();
}
