use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Whether `admin-href` is a location or the key of a registered script action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkType {
    Script,
    Link,
}

impl LinkType {
    /// Decodes the `link-type` attribute: `1` is a script, anything else a link.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => LinkType::Script,
            _ => LinkType::Link,
        }
    }
}

/// How the resource is opened; decoded from `open-type` (`0..5`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OpenType {
    #[default]
    Tab,
    NewWindow,
    SelfWindow,
    Dialog,
    EditDialog,
    Headless,
}

impl OpenType {
    /// Unrecognized or absent values fall back to `Tab`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<u8>().ok()) {
            Some(1) => OpenType::NewWindow,
            Some(2) => OpenType::SelfWindow,
            Some(3) => OpenType::Dialog,
            Some(4) => OpenType::EditDialog,
            Some(5) => OpenType::Headless,
            _ => OpenType::Tab,
        }
    }
}

/// Where request parameters come from; decoded from `param-type` (`0..3`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ParamType {
    #[default]
    None,
    SearchForm,
    SingleRow,
    MultiRow,
}

impl ParamType {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => ParamType::SearchForm,
            Some("2") => ParamType::SingleRow,
            Some("3") => ParamType::MultiRow,
            _ => ParamType::None,
        }
    }
}

/// Structured form of a clicked directive. Built once per click.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionDescriptor {
    pub url: String,
    pub link_type: LinkType,
    pub open_type: OpenType,
    pub param_type: ParamType,
    pub param_source_id: Option<String>,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub no_close: bool,
    pub confirm_text: Option<String>,
    pub edit_form_id: Option<String>,
}

/// A page element as reported by the host: its attributes and text content.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Element {
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    #[serde(default)]
    pub text: String,
}

impl Element {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attrs: HashMap::new(),
            text: text.into(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}
