//! Parameter Extractor.
//!
//! Resolves the request parameters a directive asks for: nothing, a search
//! form, exactly one checked grid row, or a set of checked grid rows.

use tracing::debug;

use crate::host::{DataGrid, FormSource, Row};
use crate::services::url_params::encode_pairs;
use crate::types::directive::ParamType;
use crate::types::errors::ParamError;
use crate::types::settings::ShellSettings;

/// Returns a URL-encoded parameter string for `param_type`.
///
/// `source_id` overrides the configured default form or grid.
pub fn extract<H>(
    param_type: ParamType,
    source_id: Option<&str>,
    settings: &ShellSettings,
    page: &H,
) -> Result<String, ParamError>
where
    H: DataGrid + FormSource + ?Sized,
{
    match param_type {
        ParamType::None => Ok(String::new()),
        ParamType::SearchForm => by_search_form(source_id, settings, page),
        ParamType::SingleRow => by_single_row(source_id, settings, page),
        ParamType::MultiRow => by_multi_row(source_id, settings, page),
    }
}

/// Serializes the named form, defaulting to the configured search form.
pub fn by_search_form<H>(
    source_id: Option<&str>,
    settings: &ShellSettings,
    page: &H,
) -> Result<String, ParamError>
where
    H: FormSource + ?Sized,
{
    let form_id = source_id.unwrap_or(&settings.search_form_id);
    page.serialize_form(form_id)
        .ok_or_else(|| ParamError::FormNotFound(form_id.to_string()))
}

/// `pk=<value>` for exactly one checked row.
pub fn by_single_row<H>(
    source_id: Option<&str>,
    settings: &ShellSettings,
    page: &H,
) -> Result<String, ParamError>
where
    H: DataGrid + ?Sized,
{
    let (pk_field, rows) = checked_rows(source_id, settings, page)?;
    match rows.as_slice() {
        [] => Err(ParamError::NoSelection),
        [row] => Ok(encode_pairs(pk_field, [pk_value(row, pk_field).as_str()])),
        many => Err(ParamError::TooManySelected(many.len())),
    }
}

/// `pk=<v1>&pk=<v2>&...` for every checked row, in selection order.
pub fn by_multi_row<H>(
    source_id: Option<&str>,
    settings: &ShellSettings,
    page: &H,
) -> Result<String, ParamError>
where
    H: DataGrid + ?Sized,
{
    let (pk_field, rows) = checked_rows(source_id, settings, page)?;
    if rows.is_empty() {
        return Err(ParamError::NoSelection);
    }
    let values: Vec<String> = rows.iter().map(|row| pk_value(row, pk_field)).collect();
    Ok(encode_pairs(pk_field, values.iter().map(String::as_str)))
}

fn checked_rows<'s, H>(
    source_id: Option<&str>,
    settings: &'s ShellSettings,
    page: &H,
) -> Result<(&'s str, Vec<Row>), ParamError>
where
    H: DataGrid + ?Sized,
{
    let pk_field = settings.pk_field.trim();
    if pk_field.is_empty() {
        return Err(ParamError::MissingPkField);
    }

    let grid_id = source_id.unwrap_or(&settings.table_id).trim();
    if grid_id.is_empty() {
        return Err(ParamError::MissingGrid);
    }

    let rows = page
        .checked_rows(grid_id)
        .ok_or_else(|| ParamError::GridNotFound(grid_id.to_string()))?;
    debug!(grid = grid_id, checked = rows.len(), "read checked rows");
    Ok((pk_field, rows))
}

/// Renders a row's primary key the way it would appear in a query string.
fn pk_value(row: &Row, pk_field: &str) -> String {
    match row.get(pk_field) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
