//! Files waiting to be uploaded.

use crate::handle::FileHandle;

/// A pending file: its display handle plus the host payload to send.
#[derive(Debug, Clone)]
pub struct PendingFile<F> {
    pub handle: FileHandle,
    pub payload: F,
}

/// Insertion-ordered collection of files awaiting upload, keyed by
/// [`FileHandle::key`].
///
/// Inserting a key that is already present is a no-op, so picking the
/// same file twice or dropping a folder again does not duplicate entries.
/// Lookups are linear; lists hold what a user drags in by hand.
#[derive(Debug, Clone)]
pub struct PendingFiles<F> {
    entries: Vec<PendingFile<F>>,
}

impl<F> PendingFiles<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a file. Returns `false` and leaves the collection untouched
    /// when the key is already taken.
    pub fn insert(&mut self, handle: FileHandle, payload: F) -> bool {
        if self.contains(handle.key()) {
            return false;
        }
        self.entries.push(PendingFile { handle, payload });
        true
    }

    /// Remove the file stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<PendingFile<F>> {
        let index = self.entries.iter().position(|e| e.handle.key() == key)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&PendingFile<F>> {
        self.entries.iter().find(|e| e.handle.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingFile<F>> {
        self.entries.iter()
    }

    /// Sum of all pending file sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.handle.size()).sum()
    }

    /// Multipart parts as `(field name, payload)`, one per file.
    ///
    /// The key doubles as the part's filename so folder structure
    /// survives on the receiving side.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &F)> {
        self.entries
            .iter()
            .map(|e| (e.handle.key(), &e.payload))
    }
}

impl<F> Default for PendingFiles<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str, size: u64) -> FileHandle {
        FileHandle::new(name, size)
    }

    #[test]
    fn test_insert_is_idempotent_per_key() {
        let mut files = PendingFiles::new();

        assert!(files.insert(handle("a.txt", 10), 1));
        assert!(!files.insert(handle("a.txt", 99), 2));

        assert_eq!(files.len(), 1);
        assert_eq!(files.get("a.txt").map(|f| f.payload), Some(1));
    }

    #[test]
    fn test_same_name_in_different_folders_are_distinct() {
        let mut files = PendingFiles::new();

        files.insert(
            handle("a.txt", 1).with_relative_path(Some("x/a.txt".into())),
            (),
        );
        files.insert(
            handle("a.txt", 1).with_relative_path(Some("y/a.txt".into())),
            (),
        );
        files.insert(handle("a.txt", 1), ());

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_remove_then_reinsert() {
        let mut files = PendingFiles::new();
        files.insert(handle("a.txt", 1), "first");
        files.insert(handle("b.txt", 2), "second");

        let removed = files.remove("a.txt").map(|f| f.payload);
        assert_eq!(removed, Some("first"));
        assert!(files.remove("a.txt").is_none());
        assert!(!files.contains("a.txt"));

        assert!(files.insert(handle("a.txt", 1), "again"));
        let keys: Vec<_> = files.iter().map(|f| f.handle.key()).collect();
        assert_eq!(keys, ["b.txt", "a.txt"]);
    }

    #[test]
    fn test_parts_follow_insertion_order() {
        let mut files = PendingFiles::new();
        files.insert(
            handle("b.txt", 5).with_relative_path(Some("docs/b.txt".into())),
            'b',
        );
        files.insert(handle("a.txt", 7), 'a');

        let parts: Vec<_> = files.parts().map(|(k, p)| (k.to_string(), *p)).collect();
        assert_eq!(
            parts,
            [("docs/b.txt".to_string(), 'b'), ("a.txt".to_string(), 'a')]
        );
        assert_eq!(files.total_size(), 12);
    }
}
