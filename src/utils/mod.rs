//! Utility modules for DOM access and logging.
//!
//! Provides:
//! - [`dom`] - Window access, alerts, `FileList` and JS error helpers
//! - [`logging`] - `tracing` subscriber writing to the browser console

pub mod dom;
pub mod logging;
