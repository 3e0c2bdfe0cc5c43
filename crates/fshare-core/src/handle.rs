//! File handles for picked and dropped files.

/// A file the user picked or dropped, as shown in the list.
///
/// `relative_path` is only set when the file came from inside a directory
/// (folder picker or a dropped directory). It is slash-separated with no
/// leading slash, e.g. `photos/2024/beach.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    size: u64,
    relative_path: Option<String>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            relative_path: None,
        }
    }

    /// Attach a directory-relative path. Empty paths are ignored, which
    /// matches what browsers report for files picked outside a folder.
    pub fn with_relative_path(mut self, path: Option<String>) -> Self {
        self.relative_path = path.filter(|p| !p.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    /// Key in the pending collection and multipart field name.
    ///
    /// The relative path when known, otherwise the bare file name.
    pub fn key(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.name)
    }
}

/// Derive a relative path from a drag-and-drop entry's full path.
///
/// Dropped entries report paths rooted at the drop (`/dirX/fileB`). Files
/// dropped at top level (`/fileA`) have no directory context and yield
/// `None`.
pub fn relative_path_from_full_path(full_path: &str) -> Option<String> {
    let trimmed = full_path.trim_start_matches('/');
    trimmed.contains('/').then(|| trimmed.to_string())
}
