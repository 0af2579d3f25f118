//! Directive Parser.
//!
//! Reads the `admin-href` family of attributes off a clicked element into an
//! [`ActionDescriptor`]. The attribute names are the contract with markup
//! authors and must not change.

use tracing::warn;

use crate::types::directive::{ActionDescriptor, Element, LinkType, OpenType, ParamType};
use crate::types::errors::DirectiveError;
use crate::types::settings::ShellSettings;

pub const ATTR_HREF: &str = "admin-href";
pub const ATTR_LINK_TYPE: &str = "link-type";
pub const ATTR_OPEN_TYPE: &str = "open-type";
pub const ATTR_PARAM_TYPE: &str = "param-type";
pub const ATTR_WIDTH: &str = "width";
pub const ATTR_HEIGHT: &str = "height";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_NO_CLOSE: &str = "no-close";
pub const ATTR_CONFIRM: &str = "confirm";
pub const ATTR_EDIT_FORM_ID: &str = "edit-form-id";
pub const ATTR_PARAM_OBJ_ID: &str = "param-obj-id";
pub const ATTR_EVENT: &str = "admin-event";
pub const ATTR_DEFAULT_OPEN: &str = "admin-default-open";

/// Anything a directive can be read from.
pub trait DirectiveSource {
    fn attr(&self, name: &str) -> Option<&str>;
    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
    fn text(&self) -> &str;
}

impl DirectiveSource for Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Non-empty, trimmed attribute value.
fn non_empty<'a>(el: &'a dyn DirectiveSource, name: &str) -> Option<&'a str> {
    el.attr(name).map(str::trim).filter(|v| !v.is_empty())
}

fn pixels(el: &dyn DirectiveSource, name: &str, default: u32) -> u32 {
    match non_empty(el, name) {
        None => default,
        Some(raw) => match raw.trim_end_matches("px").parse::<u32>() {
            Ok(px) if px > 0 => px,
            _ => {
                warn!(attr = name, value = raw, "ignoring malformed size attribute");
                default
            }
        },
    }
}

/// Builds the descriptor for a clicked element.
pub fn parse(
    el: &dyn DirectiveSource,
    settings: &ShellSettings,
) -> Result<ActionDescriptor, DirectiveError> {
    let url = non_empty(el, ATTR_HREF).ok_or(DirectiveError::MissingHref)?;

    let title = non_empty(el, ATTR_TITLE)
        .map(str::to_string)
        .unwrap_or_else(|| el.text().trim().to_string());

    Ok(ActionDescriptor {
        url: url.to_string(),
        link_type: LinkType::from_attr(el.attr(ATTR_LINK_TYPE)),
        open_type: OpenType::from_attr(el.attr(ATTR_OPEN_TYPE)),
        param_type: ParamType::from_attr(el.attr(ATTR_PARAM_TYPE)),
        param_source_id: non_empty(el, ATTR_PARAM_OBJ_ID).map(str::to_string),
        title,
        width: pixels(el, ATTR_WIDTH, settings.dialog.width),
        height: pixels(el, ATTR_HEIGHT, settings.dialog.height),
        no_close: el.has_attr(ATTR_NO_CLOSE),
        confirm_text: non_empty(el, ATTR_CONFIRM).map(str::to_string),
        edit_form_id: non_empty(el, ATTR_EDIT_FORM_ID).map(str::to_string),
    })
}
