//! # Domain Model: Vault Entries and Results
//!
//! The core never owns vault content. [`FileEntry`] and [`FolderEntry`] are
//! lightweight descriptors derived from a `/`-delimited path; metadata and
//! content are read lazily through the [`crate::vault::Vault`] trait.
//!
//! ## Paths
//!
//! The vault root is the reserved path `"/"`. Entries below the root do not
//! carry a leading slash: a file at the top level is `"note.md"`, a nested
//! one is `"Projects/X/note.md"`. A folder's children are exactly the
//! entries whose parent path equals the folder's path.

use std::collections::BTreeMap;

use crate::props::PropValue;

/// Path of the vault root folder.
pub const ROOT_PATH: &str = "/";

/// Parent path of a vault path. Top-level entries resolve to [`ROOT_PATH`].
pub fn parent_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent.to_string(),
        _ => ROOT_PATH.to_string(),
    }
}

/// A document or attachment in the vault, identified by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Unique `/`-delimited vault path, e.g. `"Projects/X/note.md"`.
    pub path: String,
    /// Last path segment including the extension, e.g. `"note.md"`.
    pub name: String,
    /// Name without the extension, e.g. `"note"`.
    pub basename: String,
    /// Extension without the dot, empty if the name has none.
    pub extension: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        let (basename, extension) = match name.rsplit_once('.') {
            Some((base, ext)) if !base.is_empty() => (base.to_string(), ext.to_string()),
            _ => (name.clone(), String::new()),
        };
        Self {
            path,
            name,
            basename,
            extension,
        }
    }

    pub fn parent_path(&self) -> String {
        parent_path(&self.path)
    }
}

/// A folder in the vault, identified by path.
///
/// Children are not stored here; the vault derives them from path parentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Unique `/`-delimited vault path. The root is `"/"`.
    pub path: String,
    /// Last path segment. The root's name is empty.
    pub name: String,
}

impl FolderEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = if path == ROOT_PATH {
            String::new()
        } else {
            path.rsplit('/').next().unwrap_or(&path).to_string()
        };
        Self { path, name }
    }

    pub fn root() -> Self {
        Self::new(ROOT_PATH)
    }

    pub fn parent_path(&self) -> String {
        parent_path(&self.path)
    }

    /// Number of `/`-separated segments in the path. The root has zero.
    pub fn depth(&self) -> usize {
        if self.path == ROOT_PATH {
            0
        } else {
            self.path.split('/').count()
        }
    }
}

/// Cached metadata for a single file, as reported by the host vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetadata {
    /// Tags carried by the file, possibly hierarchical (`#a/b`).
    pub tags: Vec<String>,
    /// Parsed front-matter key/value pairs.
    pub frontmatter: BTreeMap<String, PropValue>,
    /// Outbound wiki-link target strings.
    pub links: Vec<String>,
    /// Outbound embed target strings.
    pub embeds: Vec<String>,
}

impl FileMetadata {
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: PropValue) -> Self {
        self.frontmatter.insert(key.into(), value);
        self
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_embeds<I, S>(mut self, embeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.embeds = embeds.into_iter().map(Into::into).collect();
        self
    }
}

/// The ordered files and folders a query produced, ready to render.
///
/// Produced fresh per query; never aliased to the engine's cached base set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
}

/// File counts split by kind, for `N / M files` labels and amount badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTally {
    pub md_files: usize,
    pub canvas_files: usize,
    pub attachment_files: usize,
    pub folders: usize,
}

impl FileTally {
    pub fn total_files(&self) -> usize {
        self.md_files + self.canvas_files + self.attachment_files
    }
}
