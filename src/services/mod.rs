//! Admin console services.
//!
//! Stateless pieces of the shell: directive parsing, parameter extraction,
//! action dispatch, tab-strip scroll geometry, script actions and settings persistence.

pub mod action_dispatcher;
pub mod action_registry;
pub mod directive_parser;
pub mod param_extractor;
pub mod scroll_engine;
pub mod settings_engine;
pub mod url_params;
