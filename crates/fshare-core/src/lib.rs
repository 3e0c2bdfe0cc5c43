//! Platform-independent logic for the fshare upload widget.
//!
//! - [`flatten`] - Breadth-first expansion of dropped files and directories
//! - [`FileHandle`] - A file picked or dropped by the user
//! - [`PendingFiles`] - Keyed, insertion-ordered set of files awaiting upload
//! - [`human_file_size`] - SI size labels for the file list
//! - [`UploadStatus`] - Single-flight upload state machine
//!
//! Nothing here touches the DOM. The browser layer implements
//! [`HostEntry`] and [`DirectoryReader`] over the File and Directory
//! Entries API and drives [`UploadStatus`] from `XMLHttpRequest` events.

pub mod error;
pub mod flatten;
pub mod format;
pub mod handle;
pub mod pending;
pub mod upload;

pub use error::{ReadError, UploadError};
pub use flatten::{DirectoryReader, EntryKind, Flattened, HostEntry, flatten, resolve_each};
pub use format::human_file_size;
pub use handle::{FileHandle, relative_path_from_full_path};
pub use pending::{PendingFile, PendingFiles};
pub use upload::{UploadEvent, UploadStatus, progress_percent};
