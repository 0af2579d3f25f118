use admin_console::host::{HostCommand, PageHost};
use admin_console::managers::tab_manager::{CloseMode, TabSession, TabSessionTrait};
use admin_console::types::errors::TabError;
use admin_console::types::settings::ShellSettings;
use admin_console::types::tab::{StripGeometry, TabEntry};

fn session() -> TabSession {
    TabSession::new(TabEntry::new("/home", "Home", true), "New Tab")
}

/// Home plus `/a`, `/b`, `/c` (unpinned), current on `/c`.
fn session_with_three(host: &mut PageHost) -> TabSession {
    let mut s = session();
    for url in ["/a", "/b", "/c"] {
        s.open_or_activate(url, url, "", false, host);
    }
    host.take_commands();
    s
}

fn keys(s: &TabSession) -> Vec<&str> {
    s.entries().iter().map(|e| e.key.as_str()).collect()
}

#[test]
fn test_new_session_holds_home() {
    let s = TabSession::from_settings(&ShellSettings::default());
    assert_eq!(s.len(), 1);
    assert_eq!(s.current_index(), 0);
    let home = s.current().unwrap();
    assert_eq!(home.key, "/admin/home");
    assert!(home.pinned);
}

#[test]
fn test_open_appends_and_activates() {
    let mut host = PageHost::default();
    let mut s = session();
    let index = s.open_or_activate("Users", "/user/list", "dept=3", false, &mut host);

    assert_eq!(index, 1);
    assert_eq!(s.current().unwrap().key, "/user/list?dept=3");
    assert_eq!(s.current().unwrap().title, "Users");
    let commands = host.commands();
    assert!(matches!(&commands[0], HostCommand::AddTab(spec) if spec.id == "/user/list?dept=3" && spec.content_url == spec.id));
    assert_eq!(commands[1], HostCommand::ActivateTab { id: "/user/list?dept=3".to_string() });
}

#[test]
fn test_open_is_idempotent_per_key() {
    let mut host = PageHost::default();
    let mut s = session();
    s.open_or_activate("Users", "/user/list", "", false, &mut host);
    s.open_or_activate("Roles", "/role/list", "", false, &mut host);
    let index = s.open_or_activate("Users again", "/user/list", "", false, &mut host);

    assert_eq!(index, 1);
    assert_eq!(s.len(), 3);
    assert_eq!(s.entries()[1].title, "Users");
    let adds = host.commands().iter().filter(|c| matches!(c, HostCommand::AddTab(_))).count();
    assert_eq!(adds, 2);
}

#[test]
fn test_same_url_different_params_are_distinct() {
    let mut host = PageHost::default();
    let mut s = session();
    s.open_or_activate("A", "/user/view", "id=1", false, &mut host);
    s.open_or_activate("B", "/user/view", "id=2", false, &mut host);
    assert_eq!(keys(&s), vec!["/home", "/user/view?id=1", "/user/view?id=2"]);
}

#[test]
fn test_blank_title_uses_default() {
    let mut host = PageHost::default();
    let mut s = session();
    s.open_or_activate("  ", "/x", "", false, &mut host);
    assert_eq!(s.current().unwrap().title, "New Tab");
}

#[test]
fn test_open_pinned_tab() {
    let mut host = PageHost::default();
    let mut s = session();
    s.open_or_activate("Dash", "/dash", "", true, &mut host);
    assert!(s.current().unwrap().pinned);
    assert!(!s.close_current(&mut host));
}

#[test]
fn test_close_current_on_first_tab_is_noop() {
    let mut host = PageHost::default();
    let mut s = TabSession::new(TabEntry::new("/home", "Home", false), "New Tab");
    assert!(!s.close_current(&mut host));
    assert_eq!(s.len(), 1);
    assert!(host.commands().is_empty());
}

#[test]
fn test_close_current_last_moves_left() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    assert!(s.close_current(&mut host));
    assert_eq!(keys(&s), vec!["/home", "/a", "/b"]);
    assert_eq!(s.current_index(), 2);
    assert_eq!(host.commands()[0], HostCommand::CloseTab { id: "/c".to_string() });
    assert_eq!(host.commands()[1], HostCommand::ActivateTab { id: "/b".to_string() });
}

#[test]
fn test_close_current_middle_activates_right_neighbor() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_index_change(1, &mut host).unwrap();
    assert!(s.close_current(&mut host));
    assert_eq!(s.current().unwrap().key, "/b");
    assert_eq!(s.current_index(), 1);
}

#[test]
fn test_close_others_keeps_pinned_and_current() {
    let mut host = PageHost::default();
    let mut s = TabSession::new(TabEntry::new("A", "A", true), "New Tab");
    s.open_or_activate("B", "B", "", false, &mut host);
    s.open_or_activate("C", "C", "", false, &mut host);
    host.take_commands();

    let removed = s.close_others(CloseMode::OthersOnly, &mut host);
    assert_eq!(removed, 1);
    assert_eq!(keys(&s), vec!["A", "C"]);
    assert_eq!(s.current_index(), 1);
    assert_eq!(host.commands()[0], HostCommand::RemoveTabs { ids: vec!["B".to_string()] });
    assert_eq!(host.commands()[1], HostCommand::SetStripOffset { offset: 0.0 });
}

#[test]
fn test_close_others_on_pinned_current() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_index_change(0, &mut host).unwrap();
    s.close_others(CloseMode::OthersOnly, &mut host);
    assert_eq!(keys(&s), vec!["/home"]);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn test_close_all_leaves_only_pinned() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.open_or_activate("Pinned", "/p", "", true, &mut host);
    s.open_or_activate("D", "/d", "", false, &mut host);
    host.take_commands();

    let removed = s.close_others(CloseMode::All, &mut host);
    assert_eq!(removed, 4);
    assert_eq!(keys(&s), vec!["/home", "/p"]);
    assert!(s.current_index() < s.len());
    assert!(host.commands().contains(&HostCommand::SetStripOffset { offset: 0.0 }));
    assert!(matches!(host.commands().last(), Some(HostCommand::ActivateTab { .. })));
}

#[test]
fn test_close_all_with_nothing_to_remove() {
    let mut host = PageHost::default();
    let mut s = session();
    assert_eq!(s.close_others(CloseMode::All, &mut host), 0);
    assert_eq!(s.len(), 1);
    assert!(!host.commands().iter().any(|c| matches!(c, HostCommand::RemoveTabs { .. })));
}

#[test]
fn test_external_index_change_updates_menu() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_index_change(1, &mut host).unwrap();
    assert_eq!(s.current_index(), 1);
    assert_eq!(host.commands().last(), Some(&HostCommand::ActiveKeyChanged { key: "/a".to_string() }));
}

#[test]
fn test_external_index_change_scrolls_into_view() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    host.snapshot_mut().strip = StripGeometry::from_widths(200.0, 0.0, &[100.0; 4]);
    s.on_external_index_change(3, &mut host).unwrap();
    assert!(host.snapshot().strip.is_visible(3));
}

#[test]
fn test_external_index_change_out_of_range() {
    let mut host = PageHost::default();
    let mut s = session();
    assert_eq!(s.on_external_index_change(4, &mut host), Err(TabError::InvalidIndex(4)));
    assert_eq!(s.current_index(), 0);
}

#[test]
fn test_external_delete_left_of_current_compensates() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_delete(1).unwrap();
    assert_eq!(keys(&s), vec!["/home", "/b", "/c"]);
    assert_eq!(s.current_index(), 2);
    assert_eq!(s.current().unwrap().key, "/c");
}

#[test]
fn test_external_delete_right_of_current() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_index_change(1, &mut host).unwrap();
    s.on_external_delete(3).unwrap();
    assert_eq!(s.current().unwrap().key, "/a");
}

#[test]
fn test_external_delete_current_last_clamps() {
    let mut host = PageHost::default();
    let mut s = session_with_three(&mut host);
    s.on_external_delete(3).unwrap();
    assert_eq!(s.current_index(), 2);
    assert_eq!(s.current().unwrap().key, "/b");
}

#[test]
fn test_external_delete_invalid_index() {
    let mut s = session();
    assert_eq!(s.on_external_delete(1), Err(TabError::InvalidIndex(1)));
    assert_eq!(s.len(), 1);
}
