use serde::{Deserialize, Serialize};

use super::errors::ShellError;

/// Icon/severity of a notice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Success,
    Error,
}

/// A dismissable message shown by the modal layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub title: String,
    pub content: String,
    pub level: NoticeLevel,
    /// Blocking notices must be dismissed before anything else is clickable.
    pub blocking: bool,
}

pub const TITLE_NOTICE: &str = "Notice";
pub const TITLE_ERROR: &str = "Error";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            title: TITLE_NOTICE.to_string(),
            content: content.into(),
            level: NoticeLevel::Info,
            blocking: false,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            title: TITLE_NOTICE.to_string(),
            content: content.into(),
            level: NoticeLevel::Success,
            blocking: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            title: TITLE_ERROR.to_string(),
            content: content.into(),
            level: NoticeLevel::Error,
            blocking: false,
        }
    }

    pub fn from_error(err: &ShellError) -> Self {
        let level = match err {
            ShellError::Param(_) => NoticeLevel::Warning,
            ShellError::Directive(_) => NoticeLevel::Info,
            _ => NoticeLevel::Error,
        };
        Self {
            title: TITLE_NOTICE.to_string(),
            content: err.to_string(),
            level,
            blocking: err.is_blocking(),
        }
    }
}
