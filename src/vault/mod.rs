//! # Vault Access
//!
//! The vault is the host application's hierarchical document store. The
//! engine consumes it through the [`Vault`] trait and never owns it:
//! enumeration, metadata, and content I/O all go through here.
//!
//! [`InMemoryVault`] is the bundled implementation, used both for tests
//! and for hosts that mirror their store into memory.

mod memory;

pub use memory::InMemoryVault;

use crate::error::Result;
use crate::model::{FileEntry, FileMetadata, FolderEntry};
use crate::sorting::is_document;

/// Abstract interface to the host's file store.
///
/// All reads take `&self`; implementations are expected to use interior
/// mutability where needed, since the engine is single-threaded.
pub trait Vault {
    /// Every file in the vault, in no particular order.
    fn files(&self) -> Vec<FileEntry>;

    /// Every folder in the vault (excluding the root), in no particular order.
    fn folders(&self) -> Vec<FolderEntry>;

    /// Resolve a folder path. `"/"` resolves to the root.
    fn folder_by_path(&self, path: &str) -> Option<FolderEntry>;

    /// The root folder.
    fn root(&self) -> FolderEntry {
        FolderEntry::root()
    }

    /// Cached metadata for a file, if the host has any.
    fn metadata(&self, path: &str) -> Option<FileMetadata>;

    /// Raw content of a file.
    fn read_content(&self, path: &str) -> Result<String>;

    /// Overwrite the content of a file.
    fn write_content(&self, path: &str, content: &str) -> Result<()>;

    /// Direct children of a folder, split by kind.
    fn children_of(&self, folder_path: &str) -> (Vec<FileEntry>, Vec<FolderEntry>) {
        let files = self
            .files()
            .into_iter()
            .filter(|f| f.parent_path() == folder_path)
            .collect();
        let folders = self
            .folders()
            .into_iter()
            .filter(|f| f.parent_path() == folder_path)
            .collect();
        (files, folders)
    }

    /// Every markdown/canvas document in the vault.
    fn documents(&self) -> Vec<FileEntry> {
        self.files().into_iter().filter(is_document).collect()
    }
}
