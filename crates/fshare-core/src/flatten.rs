//! Breadth-first flattening of dropped entries.
//!
//! A drop hands over a mix of file and directory entries. Directories are
//! read through an asynchronous, batch-oriented reader that has to be
//! called until it returns an empty batch. Instead of recursing, the
//! traversal keeps an explicit queue: files are moved to the result,
//! directories are replaced by their children appended at the tail.
//!
//! The resulting order is breadth-first over the drop order. A directory's
//! children land behind everything already queued when it is expanded, so
//! `[dirX, fileA]` with `dirX = [fileB]` yields `fileA, fileB`.
//!
//! # Read failures
//!
//! A failing directory read stops expanding that directory only. Children
//! received in earlier batches are kept, the failure is logged and
//! recorded in [`Flattened::failed`], and sibling branches carry on.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::ReadError;

/// Classification of a host entry, provided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A file or directory handle from the host drag-and-drop layer.
#[allow(async_fn_in_trait)]
pub trait HostEntry: Sized {
    type Reader: DirectoryReader<Entry = Self>;
    /// Concrete file data an entry resolves to.
    type File;

    fn kind(&self) -> EntryKind;

    /// Host path of the entry, rooted at the drop (`/dirX/fileB`).
    fn full_path(&self) -> String;

    /// Open a fresh reader over this directory. `None` for files.
    fn create_reader(&self) -> Option<Self::Reader>;

    /// Resolve a file entry to its data.
    async fn resolve(&self) -> Result<Self::File, ReadError>;
}

/// Batch reader over one directory's children.
#[allow(async_fn_in_trait)]
pub trait DirectoryReader {
    type Entry;

    /// Next batch of children. An empty batch means the directory is exhausted.
    async fn read_entries(&mut self) -> Result<Vec<Self::Entry>, ReadError>;
}

/// Output of [`flatten`].
#[derive(Debug)]
pub struct Flattened<E> {
    /// File entries in breadth-first order.
    pub files: Vec<E>,
    /// Directories whose expansion stopped on a read error.
    pub failed: Vec<ReadError>,
}

/// Flatten dropped entries into a breadth-first sequence of file entries.
pub async fn flatten<E, I>(entries: I) -> Flattened<E>
where
    E: HostEntry,
    I: IntoIterator<Item = E>,
{
    let mut queue: VecDeque<E> = entries.into_iter().collect();
    let mut files = Vec::new();
    let mut failed = Vec::new();

    while let Some(entry) = queue.pop_front() {
        match entry.kind() {
            EntryKind::File => files.push(entry),
            EntryKind::Directory => {
                let Some(reader) = entry.create_reader() else {
                    warn!(path = %entry.full_path(), "directory entry without a reader");
                    continue;
                };

                let (children, error) = read_all_entries(reader).await;
                queue.extend(children);

                if let Some(err) = error {
                    warn!(path = %err.path, error = %err.message, "directory read failed, skipping rest of branch");
                    failed.push(err);
                }
            }
        }
    }

    debug!(files = files.len(), failed = failed.len(), "flattened dropped entries");

    Flattened { files, failed }
}

/// Drain a reader until it reports an empty batch or fails.
async fn read_all_entries<R: DirectoryReader>(mut reader: R) -> (Vec<R::Entry>, Option<ReadError>) {
    let mut entries = Vec::new();

    loop {
        match reader.read_entries().await {
            Ok(batch) if batch.is_empty() => return (entries, None),
            Ok(batch) => entries.extend(batch),
            Err(err) => return (entries, Some(err)),
        }
    }
}

/// Resolve file entries one by one, reporting each to `on_file` as soon as
/// it is available.
///
/// Entries that fail to resolve are logged and skipped; their errors are
/// returned.
pub async fn resolve_each<E, F>(files: &[E], mut on_file: F) -> Vec<ReadError>
where
    E: HostEntry,
    F: FnMut(&E, E::File),
{
    let mut failed = Vec::new();

    for entry in files {
        match entry.resolve().await {
            Ok(file) => on_file(entry, file),
            Err(err) => {
                warn!(path = %err.path, error = %err.message, "could not resolve dropped file");
                failed.push(err);
            }
        }
    }

    failed
}
