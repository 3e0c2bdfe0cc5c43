//! UI components built with Leptos.
//!
//! - [`Uploader`] - Upload card: pickers, drop zone, file list, send button
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod uploader;

pub use uploader::Uploader;
