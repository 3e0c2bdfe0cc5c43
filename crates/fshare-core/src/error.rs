//! Error types for the widget.
//!
//! - [`ReadError`] - the host failed to list a directory or resolve a file
//! - [`UploadError`] - the upload could not be started or did not succeed

use thiserror::Error;

/// A host read failed while expanding a directory or resolving a file.
///
/// Carries the host path of the entry and the message reported by the
/// host (usually a `DOMException` name such as `NotReadableError`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to read '{path}': {message}")]
pub struct ReadError {
    pub path: String,
    pub message: String,
}

impl ReadError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Upload failures, as surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The widget is one-shot: a second upload was requested.
    #[error("an upload has already been started")]
    AlreadyStarted,

    /// Building the request (form data, XHR object) failed.
    #[error("failed to prepare upload request: {0}")]
    RequestSetup(String),

    /// The server answered with something other than 200.
    #[error("server responded with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure; no usable response.
    #[error("network error: {0}")]
    Transport(String),

    #[error("upload aborted")]
    Aborted,
}
