use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{FileXError, Result};
use crate::model::{parent_path, FileEntry, FileMetadata, FolderEntry, ROOT_PATH};
use crate::vault::Vault;

#[derive(Clone, Default)]
struct StoredFile {
    content: String,
    metadata: Option<FileMetadata>,
}

/// In-memory vault implementation.
///
/// Uses `RefCell` for interior mutability since the engine is
/// single-threaded. This keeps the [`Vault`] trait on `&self` for all
/// methods without the overhead of a lock.
///
/// Registering a file auto-registers its ancestor folders, mirroring how
/// a real vault can never contain an orphan path.
#[derive(Default)]
pub struct InMemoryVault {
    files: RefCell<BTreeMap<String, StoredFile>>,
    folders: RefCell<BTreeSet<String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with empty content and no metadata.
    pub fn add_file(&self, path: &str) {
        self.add_file_with_content(path, "");
    }

    pub fn add_file_with_content(&self, path: &str, content: &str) {
        self.register_ancestors(path);
        self.files.borrow_mut().insert(
            path.to_string(),
            StoredFile {
                content: content.to_string(),
                metadata: None,
            },
        );
    }

    pub fn add_file_with_metadata(&self, path: &str, metadata: FileMetadata) {
        self.register_ancestors(path);
        self.files.borrow_mut().insert(
            path.to_string(),
            StoredFile {
                content: String::new(),
                metadata: Some(metadata),
            },
        );
    }

    /// Attach or replace metadata for an already registered file.
    pub fn set_metadata(&self, path: &str, metadata: FileMetadata) {
        if let Some(stored) = self.files.borrow_mut().get_mut(path) {
            stored.metadata = Some(metadata);
        }
    }

    /// Register a folder (and its ancestors) without any files in it.
    pub fn add_folder(&self, path: &str) {
        let mut folders = self.folders.borrow_mut();
        let mut current = path.to_string();
        while current != ROOT_PATH {
            folders.insert(current.clone());
            current = parent_path(&current);
        }
    }

    pub fn remove_file(&self, path: &str) {
        self.files.borrow_mut().remove(path);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn register_ancestors(&self, file_path: &str) {
        let parent = parent_path(file_path);
        if parent != ROOT_PATH {
            self.add_folder(&parent);
        }
    }
}

impl Vault for InMemoryVault {
    fn files(&self) -> Vec<FileEntry> {
        self.files.borrow().keys().map(FileEntry::new).collect()
    }

    fn folders(&self) -> Vec<FolderEntry> {
        self.folders.borrow().iter().map(FolderEntry::new).collect()
    }

    fn folder_by_path(&self, path: &str) -> Option<FolderEntry> {
        if path == ROOT_PATH {
            return Some(self.root());
        }
        self.folders
            .borrow()
            .contains(path)
            .then(|| FolderEntry::new(path))
    }

    fn metadata(&self, path: &str) -> Option<FileMetadata> {
        self.files.borrow().get(path)?.metadata.clone()
    }

    fn read_content(&self, path: &str) -> Result<String> {
        self.files
            .borrow()
            .get(path)
            .map(|stored| stored.content.clone())
            .ok_or_else(|| FileXError::FileNotFound(path.to_string()))
    }

    fn write_content(&self, path: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FileXError::Vault("Simulated write error".to_string()));
        }
        let mut files = self.files.borrow_mut();
        match files.get_mut(path) {
            Some(stored) => {
                stored.content = content.to_string();
                Ok(())
            }
            None => Err(FileXError::FileNotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_nested_file_registers_ancestor_folders() {
        let vault = InMemoryVault::new();
        vault.add_file("A/B/note.md");

        let folder_paths: Vec<String> = vault.folders().into_iter().map(|f| f.path).collect();
        assert_eq!(folder_paths, vec!["A".to_string(), "A/B".to_string()]);
    }

    #[test]
    fn children_are_split_by_kind() {
        let vault = InMemoryVault::new();
        vault.add_file("note.md");
        vault.add_file("A/inner.md");
        vault.add_folder("B");

        let (files, folders) = vault.children_of(ROOT_PATH);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "note.md");
        assert_eq!(folders.len(), 2);

        let (files, folders) = vault.children_of("A");
        assert_eq!(files[0].path, "A/inner.md");
        assert!(folders.is_empty());
    }

    #[test]
    fn folder_by_path_resolves_root_and_known_folders() {
        let vault = InMemoryVault::new();
        vault.add_folder("A/B");

        assert_eq!(vault.folder_by_path(ROOT_PATH).unwrap().path, ROOT_PATH);
        assert_eq!(vault.folder_by_path("A/B").unwrap().name, "B");
        assert!(vault.folder_by_path("missing").is_none());
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let vault = InMemoryVault::new();
        assert!(matches!(
            vault.read_content("ghost.md"),
            Err(FileXError::FileNotFound(_))
        ));
    }

    #[test]
    fn write_round_trips_content() {
        let vault = InMemoryVault::new();
        vault.add_file_with_content("note.md", "old");
        vault.write_content("note.md", "new").unwrap();
        assert_eq!(vault.read_content("note.md").unwrap(), "new");
    }

    #[test]
    fn simulated_write_error_surfaces() {
        let vault = InMemoryVault::new();
        vault.add_file("note.md");
        vault.set_simulate_write_error(true);
        assert!(matches!(
            vault.write_content("note.md", "x"),
            Err(FileXError::Vault(_))
        ));
    }

    #[test]
    fn documents_exclude_attachments() {
        let vault = InMemoryVault::new();
        vault.add_file("a.md");
        vault.add_file("b.canvas");
        vault.add_file("c.png");

        let docs: Vec<String> = vault.documents().into_iter().map(|f| f.path).collect();
        assert_eq!(docs, vec!["a.md".to_string(), "b.canvas".to_string()]);
    }
}
