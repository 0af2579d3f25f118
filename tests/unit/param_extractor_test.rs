use admin_console::host::{PageHost, PageSnapshot, Row};
use admin_console::services::param_extractor::{by_multi_row, by_search_form, by_single_row, extract};
use admin_console::types::directive::ParamType;
use admin_console::types::errors::ParamError;
use admin_console::types::settings::ShellSettings;
use serde_json::json;

fn row(value: serde_json::Value) -> Row {
    value.as_object().unwrap().clone()
}

fn page_with_rows(grid: &str, rows: Vec<Row>) -> PageHost {
    let mut snapshot = PageSnapshot::default();
    snapshot.grids.insert(grid.to_string(), rows);
    PageHost::new(snapshot)
}

#[test]
fn test_none_is_empty() {
    let page = PageHost::default();
    assert_eq!(extract(ParamType::None, None, &ShellSettings::default(), &page), Ok(String::new()));
}

#[test]
fn test_search_form_uses_default_and_override() {
    let mut snapshot = PageSnapshot::default();
    snapshot.forms.insert("search_form".to_string(), "name=bob&age=3".to_string());
    snapshot.forms.insert("other".to_string(), "q=x".to_string());
    let page = PageHost::new(snapshot);
    let settings = ShellSettings::default();

    assert_eq!(by_search_form(None, &settings, &page), Ok("name=bob&age=3".to_string()));
    assert_eq!(by_search_form(Some("other"), &settings, &page), Ok("q=x".to_string()));
    assert_eq!(
        by_search_form(Some("missing"), &settings, &page),
        Err(ParamError::FormNotFound("missing".to_string()))
    );
}

#[test]
fn test_single_row_zero_selected() {
    let page = page_with_rows("main_table", vec![]);
    assert_eq!(by_single_row(None, &ShellSettings::default(), &page), Err(ParamError::NoSelection));
}

#[test]
fn test_single_row_two_selected() {
    let page = page_with_rows("main_table", vec![row(json!({"id": 1})), row(json!({"id": 2}))]);
    assert_eq!(
        by_single_row(None, &ShellSettings::default(), &page),
        Err(ParamError::TooManySelected(2))
    );
}

#[test]
fn test_single_row_one_selected() {
    let page = page_with_rows("main_table", vec![row(json!({"id": 7, "name": "x"}))]);
    assert_eq!(by_single_row(None, &ShellSettings::default(), &page), Ok("id=7".to_string()));
}

#[test]
fn test_single_row_string_key_is_encoded() {
    let page = page_with_rows("users", vec![row(json!({"id": "a b&c"}))]);
    assert_eq!(
        by_single_row(Some("users"), &ShellSettings::default(), &page),
        Ok("id=a+b%26c".to_string())
    );
}

#[test]
fn test_multi_row_preserves_selection_order() {
    let page = page_with_rows(
        "main_table",
        vec![row(json!({"id": 3})), row(json!({"id": 1})), row(json!({"id": 2}))],
    );
    assert_eq!(
        by_multi_row(None, &ShellSettings::default(), &page),
        Ok("id=3&id=1&id=2".to_string())
    );
}

#[test]
fn test_multi_row_zero_selected() {
    let page = page_with_rows("main_table", vec![]);
    assert_eq!(by_multi_row(None, &ShellSettings::default(), &page), Err(ParamError::NoSelection));
}

#[test]
fn test_grid_checks() {
    let page = page_with_rows("main_table", vec![row(json!({"id": 1}))]);

    let mut no_pk = ShellSettings::default();
    no_pk.pk_field = String::new();
    assert_eq!(by_single_row(None, &no_pk, &page), Err(ParamError::MissingPkField));
    assert_eq!(by_multi_row(None, &no_pk, &page), Err(ParamError::MissingPkField));

    let mut no_grid = ShellSettings::default();
    no_grid.table_id = String::new();
    assert_eq!(by_single_row(None, &no_grid, &page), Err(ParamError::MissingGrid));

    assert_eq!(
        by_multi_row(Some("ghost"), &ShellSettings::default(), &page),
        Err(ParamError::GridNotFound("ghost".to_string()))
    );
}

#[test]
fn test_custom_pk_field() {
    let mut settings = ShellSettings::default();
    settings.pk_field = "uid".to_string();
    let page = page_with_rows("main_table", vec![row(json!({"uid": "u-9", "id": 1}))]);
    assert_eq!(extract(ParamType::SingleRow, None, &settings, &page), Ok("uid=u-9".to_string()));
}
