//! Integration-level unit tests for the SettingsEngine public API and the
//! console that applies saved settings to a running shell.

use admin_console::app::Console;
use admin_console::host::{HostCommand, PageHost};
use admin_console::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use admin_console::types::directive::Element;
use admin_console::types::errors::SettingsError;
use admin_console::types::settings::ShellSettings;
use serde_json::json;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn config_path(dir: &TempDir) -> String {
    dir.path()
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}

fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(config_path(dir)))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
    assert!(!dir.path().join("settings.json").exists(), "load must not create the file");
}

#[test]
fn test_set_value_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("table_id", json!("user_table")).unwrap();
        engine.set_value("dialog.height", json!(480)).unwrap();
    }

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.table_id, "user_table");
    assert_eq!(settings.dialog.height, 480);
    assert_eq!(settings.dialog.width, 800);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("pk_field", json!("uuid")).unwrap();

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &ShellSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_path(&dir), "{not json").unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::Serialization(_))));
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    let err = engine.set_value("theme", json!("dark")).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
    assert_eq!(engine.get_settings(), &ShellSettings::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.load().unwrap();
    engine.save().unwrap();
    assert!(path.exists());
}

// ─── Console ───

#[test]
fn test_console_starts_from_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        config_path(&dir),
        r#"{"home": {"title": "Dashboard", "url": "/dash", "pinned": true}}"#,
    )
    .unwrap();

    let console = Console::new(Some(config_path(&dir))).unwrap();
    let home = console.shell.session.current().unwrap();
    assert_eq!(home.key, "/dash");
    assert_eq!(home.title, "Dashboard");
}

#[test]
fn test_console_set_setting_applies_to_shell() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(Some(config_path(&dir))).unwrap();
    console.set_setting("dialog.width", json!(640)).unwrap();
    console.set_setting("side.min_width_threshold", json!(1200)).unwrap();

    let mut host = PageHost::default();
    let el = Element::new("View")
        .with_attr("admin-href", "/view")
        .with_attr("open-type", "3");
    console.shell.open_link(&el, &mut host);
    assert!(matches!(&host.commands()[0], HostCommand::OpenDialog(req) if req.width == 640));

    assert!(console.shell.on_resize(1100, true, &mut host));
    assert!(!console.shell.side.is_spread());
}

#[test]
fn test_console_default_tab_title_applies_without_restart() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(Some(config_path(&dir))).unwrap();
    console.set_setting("default_tab_title", json!("Untitled")).unwrap();
    assert_eq!(console.shell.session.default_title(), "Untitled");

    let mut host = PageHost::default();
    let el = Element::new("  ").with_attr("admin-href", "/report");
    console.shell.open_link(&el, &mut host);
    assert_eq!(console.shell.session.current().unwrap().title, "Untitled");
    assert!(matches!(&host.commands()[0], HostCommand::AddTab(spec) if spec.title == "Untitled"));
}

#[test]
fn test_console_rejects_bad_value_and_keeps_shell() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(Some(config_path(&dir))).unwrap();
    assert!(console.set_setting("side.auto", json!("yes")).is_err());
    assert!(console.shell.settings.side.auto);
}
