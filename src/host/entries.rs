//! Drag-and-drop entries backed by the File and Directory Entries API.
//!
//! Bridges `FileSystemEntry` and `FileSystemDirectoryReader` to the
//! flattener's [`HostEntry`] and [`DirectoryReader`] traits. The browser
//! API is callback-based; each call is wrapped in a `Promise` and awaited
//! through `JsFuture`.

use fshare_core::{
    DirectoryReader, EntryKind, FileHandle, HostEntry, ReadError, relative_path_from_full_path,
};
use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DataTransfer, File, FileSystemDirectoryEntry, FileSystemDirectoryReader, FileSystemEntry,
    FileSystemFileEntry,
};

use crate::utils::dom::{files_from_list, js_error_message};

/// A dropped file or directory.
#[derive(Clone)]
pub struct DomEntry(FileSystemEntry);

impl DomEntry {
    /// Build the list handle for this entry once its file has resolved.
    pub fn handle_for(&self, file: &File) -> FileHandle {
        FileHandle::new(file.name(), file.size() as u64)
            .with_relative_path(relative_path_from_full_path(&self.0.full_path()))
    }
}

impl HostEntry for DomEntry {
    type Reader = DomDirectoryReader;
    type File = File;

    fn kind(&self) -> EntryKind {
        if self.0.is_directory() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    fn full_path(&self) -> String {
        self.0.full_path()
    }

    fn create_reader(&self) -> Option<DomDirectoryReader> {
        if !self.0.is_directory() {
            return None;
        }
        // `instanceof` fails on vendor-prefixed entry classes.
        let dir = self.0.unchecked_ref::<FileSystemDirectoryEntry>();
        Some(DomDirectoryReader {
            path: self.full_path(),
            reader: dir.create_reader(),
        })
    }

    async fn resolve(&self) -> Result<File, ReadError> {
        let path = self.full_path();
        if !self.0.is_file() {
            return Err(ReadError::new(&path, "not a file entry"));
        }
        let entry = self.0.unchecked_ref::<FileSystemFileEntry>();

        let promise = Promise::new(&mut |resolve, reject| {
            entry.file_with_callback_and_callback(&resolve, &reject);
        });

        let value = JsFuture::from(promise)
            .await
            .map_err(|err| ReadError::new(&path, js_error_message(&err)))?;

        value
            .dyn_into::<File>()
            .map_err(|_| ReadError::new(&path, "entry did not resolve to a File"))
    }
}

/// Reader over one dropped directory.
///
/// The browser hands out children in batches (Chrome caps them at 100),
/// so the flattener keeps calling until an empty batch comes back.
pub struct DomDirectoryReader {
    path: String,
    reader: FileSystemDirectoryReader,
}

impl DirectoryReader for DomDirectoryReader {
    type Entry = DomEntry;

    async fn read_entries(&mut self) -> Result<Vec<DomEntry>, ReadError> {
        let reader = &self.reader;
        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) = reader.read_entries_with_callback_and_callback(&resolve, &reject) {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
        });

        let batch = JsFuture::from(promise)
            .await
            .map_err(|err| ReadError::new(&self.path, js_error_message(&err)))?;

        Ok(Array::from(&batch)
            .iter()
            .map(|value| DomEntry(value.unchecked_into()))
            .collect())
    }
}

/// What a drop event carried.
pub enum Dropped {
    /// Entries that may include directories; run them through the flattener.
    Entries(Vec<DomEntry>),
    /// Plain files from browsers without entry support.
    Files(Vec<File>),
}

/// Extract the dropped items.
///
/// Must run synchronously inside the drop handler: the item list is
/// emptied once the event returns.
pub fn dropped_items(transfer: &DataTransfer) -> Dropped {
    let items = transfer.items();
    let entries: Vec<DomEntry> = (0..items.length())
        .filter_map(|i| items.get(i))
        .filter_map(|item| item.webkit_get_as_entry().ok().flatten())
        .map(DomEntry)
        .collect();

    if entries.is_empty() {
        let files = transfer
            .files()
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        Dropped::Files(files)
    } else {
        Dropped::Entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dom::fixtures::text_file;
    use js_sys::{Object, Reflect};
    use wasm_bindgen_test::wasm_bindgen_test;

    /// Entry accessors are structural, so a plain object with `fullPath` stands in.
    fn entry_at(full_path: &str) -> DomEntry {
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("fullPath"), &JsValue::from_str(full_path)).unwrap();
        DomEntry(obj.unchecked_into())
    }

    #[wasm_bindgen_test]
    fn nested_entry_is_keyed_by_relative_path() {
        let entry = entry_at("/dirX/sub/fileB");
        let handle = entry.handle_for(&text_file("fileB", "bb"));
        assert_eq!(handle.relative_path(), Some("dirX/sub/fileB"));
        assert_eq!(handle.key(), "dirX/sub/fileB");
        assert_eq!(handle.size(), 2);
    }

    #[wasm_bindgen_test]
    fn top_level_entry_is_keyed_by_name() {
        let entry = entry_at("/fileA");
        let handle = entry.handle_for(&text_file("fileA", "a"));
        assert_eq!(handle.relative_path(), None);
        assert_eq!(handle.key(), "fileA");
    }
}
