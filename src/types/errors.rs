use thiserror::Error;

// === DirectiveError ===

/// Errors raised while reading a directive off a clicked element.
#[derive(Debug, Error, PartialEq)]
pub enum DirectiveError {
    /// The element carries no `admin-href` attribute (or an empty one).
    #[error("Cannot perform this operation: no path defined [admin-href]")]
    MissingHref,
    /// A script directive names an action that was never registered.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

// === ParamError ===

/// Errors raised while collecting request parameters from a form or grid.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    /// The parameter source form does not exist on the page.
    #[error("Parameter source form is not defined: {0}")]
    FormNotFound(String),
    /// No primary-key field is configured for grid parameters.
    #[error("Parameter source grid has no primary key field defined")]
    MissingPkField,
    /// Neither the directive nor the settings name a grid.
    #[error("Parameter source grid is not defined")]
    MissingGrid,
    /// The named grid does not exist on the page.
    #[error("Parameter source grid not found: {0}")]
    GridNotFound(String),
    /// No rows are checked.
    #[error("Please select a record to operate on")]
    NoSelection,
    /// More than one row is checked where exactly one is required.
    #[error("Only one record may be selected for this operation ({0} selected)")]
    TooManySelected(usize),
}

// === TabError ===

/// Errors related to tab session operations.
#[derive(Debug, Error, PartialEq)]
pub enum TabError {
    /// The index reported by the tab strip is outside the session.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
}

// === SettingsError ===

/// Errors related to shell settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value does not fit the key's type.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShellError ===

/// Any failure surfaced by the shell. Each one degrades to a dismissable notice.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Directive(#[from] DirectiveError),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl ShellError {
    /// Blocking errors abort the click outright; the rest are ordinary notices.
    pub fn is_blocking(&self) -> bool {
        matches!(self, ShellError::Directive(DirectiveError::MissingHref))
    }
}
