//! Admin console shared type definitions.
//!
//! Each submodule defines types used across the shell.

pub mod dialog;
pub mod directive;
pub mod errors;
pub mod notice;
pub mod settings;
pub mod tab;
