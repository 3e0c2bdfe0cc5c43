//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the widget.
//! The widget is served as a static page, so everything is compile-time.

use tracing::Level;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "fshare";

/// Tagline under the header.
pub const APP_TAGLINE: &str = "Drop files or folders, get them to the server in one go.";

// =============================================================================
// Upload Configuration
// =============================================================================

/// Endpoint receiving the multipart body. Served by the same origin.
pub const UPLOAD_ENDPOINT: &str = "/";

/// HTTP method for the upload request.
pub const UPLOAD_METHOD: &str = "POST";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a removed row keeps fading out before it leaves the DOM.
pub const REMOVE_FADE_MS: u32 = 800;

/// Message shown in a blocking alert when the browser aborts the upload.
pub const ABORT_ALERT: &str = "Abort";

/// Button and hint labels.
pub mod labels {
    pub const ADD_FILES: &str = "Add files";
    pub const ADD_FOLDER: &str = "Add folder";
    pub const DROP_HINT: &str = "Drag files or folders here";
    pub const SEND: &str = "Upload";
    pub const EMPTY_LIST: &str = "No files selected";
}

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the widget.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: Level = Level::INFO;
