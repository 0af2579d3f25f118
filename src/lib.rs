//! Admin console shell core: the tab session, tab-strip scrolling, the side
//! panel, and the `admin-href` directive protocol of a browser-based
//! administrative console.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod host;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
