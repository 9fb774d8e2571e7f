//! Tag index: tag name → files carrying that tag.
//!
//! The index is an explicitly constructed service owned by the engine (or
//! by whichever component needs it); there is no ambient global instance.
//! It is rebuilt in full from the vault on demand rather than maintained
//! incrementally, which is fine at vault scale and keeps the invariants
//! trivial to uphold:
//!
//! - a document with zero tags appears only in the reserved [`NO_TAG`]
//!   bucket, never in a real tag bucket;
//! - a document with N tags appears in exactly those N buckets;
//! - the [`NO_TAG`] bucket always exists, so it is always listed.

use std::collections::BTreeMap;

use log::debug;

use crate::model::FileEntry;
use crate::sorting::sort_tags;
use crate::vault::Vault;

/// Reserved bucket for documents without any tag.
pub const NO_TAG: &str = "|no-tag";

#[derive(Debug, Default)]
pub struct TagIndex {
    buckets: BTreeMap<String, Vec<FileEntry>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from the vault's documents.
    ///
    /// Clears all buckets first, so calling this repeatedly is idempotent
    /// and always reflects the vault as of the call.
    pub fn rebuild<V: Vault>(&mut self, vault: &V) {
        self.buckets.clear();
        self.buckets.insert(NO_TAG.to_string(), Vec::new());

        for file in vault.documents() {
            let tags = vault.metadata(&file.path).map(|m| m.tags).unwrap_or_default();
            if tags.is_empty() {
                self.buckets.entry(NO_TAG.to_string()).or_default().push(file);
            } else {
                for tag in tags {
                    self.buckets.entry(tag).or_default().push(file.clone());
                }
            }
        }
        debug!("tag index rebuilt: {} buckets", self.buckets.len());
    }

    /// All tag names, ordered for display (no-tag bucket last).
    pub fn tag_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.keys().cloned().collect();
        sort_tags(&mut names);
        names
    }

    /// Files in a tag's bucket; empty if the tag is unknown.
    pub fn files_for_tag(&self, tag: &str) -> &[FileEntry] {
        self.buckets.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bucket size; 0 if the tag is unknown.
    pub fn file_count_for_tag(&self, tag: &str) -> usize {
        self.buckets.get(tag).map(Vec::len).unwrap_or(0)
    }
}
