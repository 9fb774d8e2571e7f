//! # Query Engine
//!
//! [`QueryEngine`] is the heart of the crate: it owns the vault handle, the
//! tag index, and the cached base result, and turns a [`Filter`] into the
//! exact ordered [`ResultSet`] the UI should render.
//!
//! ## Base result and invalidation
//!
//! Each query-affecting action (search, segment, folder, tag, command) runs
//! a handler that recomputes the *base* file and folder lists. View-only
//! actions (visibility toggles, sort changes) reuse the cached base and only
//! re-derive the emitted set, so flipping a checkbox never re-walks the
//! vault. `base_queries_run()` counts handler executions and makes the
//! caching observable in tests.
//!
//! A `Refresh` re-executes whatever real query ran last. If nothing ran yet
//! it leaves the (empty) base untouched.

use log::debug;

use crate::error::Result;
use crate::filter::{Action, Command, Filter, Segment};
use crate::frontmatter::{self, FrontmatterWrite};
use crate::model::{FileEntry, FileTally, FolderEntry, ResultSet};
use crate::props::PropValue;
use crate::sorting::{
    is_attachment, is_document, is_md, sort_files, sort_files_by_property, sort_folders,
    NAME_PROPERTY,
};
use crate::tag_index::TagIndex;
use crate::vault::Vault;

pub struct QueryEngine<V: Vault> {
    vault: V,
    tag_index: TagIndex,
    base_files: Vec<FileEntry>,
    base_folders: Vec<FolderEntry>,
    prev: Filter,
    base_queries: u64,
}

impl<V: Vault> QueryEngine<V> {
    pub fn new(vault: V) -> Self {
        Self {
            vault,
            tag_index: TagIndex::new(),
            base_files: Vec::new(),
            base_folders: Vec::new(),
            prev: Filter::undefined(),
            base_queries: 0,
        }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// How many base query handlers have run. View-only transitions leave
    /// this unchanged.
    pub fn base_queries_run(&self) -> u64 {
        self.base_queries
    }

    /// Run one query cycle and return the ordered set to render.
    pub fn query_by_filter(&mut self, filter: &Filter) -> ResultSet {
        let effective = self.resolve_action(filter.action());
        debug!(
            "query: action {:?} (effective {:?}), segment {:?}",
            filter.action(),
            effective,
            filter.segment()
        );

        if effective.is_query_affecting() {
            self.base_files.clear();
            self.base_folders.clear();
            self.base_queries += 1;

            match effective {
                Action::Search => self.handle_search(filter),
                Action::Segment => self.handle_segment(filter),
                Action::Folder => self.handle_folder(filter),
                Action::Tag => self.handle_tag(filter),
                Action::Command => self.handle_command(filter),
                _ => {}
            }
            debug!(
                "base recomputed: {} files, {} folders",
                self.base_files.len(),
                self.base_folders.len()
            );
        }

        let mut snapshot = filter.create_copy();
        snapshot.set_action(effective);
        self.prev = snapshot;

        self.emit(filter)
    }

    /// `Refresh` re-runs the previous query. Without a prior real query
    /// there is nothing to re-run and the empty base passes through.
    fn resolve_action(&self, action: Action) -> Action {
        if action != Action::Refresh {
            return action;
        }
        let prev = self.prev.action();
        if prev.is_query_affecting() {
            prev
        } else {
            Action::Undefined
        }
    }

    fn handle_search(&mut self, filter: &Filter) {
        let needle = filter.search_text().to_lowercase();
        self.base_files = self
            .vault
            .files()
            .into_iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .collect();
        self.base_folders = self
            .vault
            .folders()
            .into_iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .collect();
    }

    fn handle_segment(&mut self, filter: &Filter) {
        match filter.segment() {
            Segment::Vault => {
                let (files, folders) = self.vault.children_of(self.vault.root().path.as_str());
                self.base_files = files;
                self.base_folders = folders;
            }
            Segment::FolderL2 => {
                self.base_folders = self
                    .vault
                    .folders()
                    .into_iter()
                    .filter(|f| f.depth() == 2)
                    .collect();
            }
            Segment::AllFiles => {
                self.base_files = self.vault.files();
            }
            Segment::UnLinked => {
                self.base_files = self.unlinked_attachments();
            }
            // the tag browser fills its file list through Tag actions
            Segment::Tag | Segment::None => {}
        }
    }

    fn handle_folder(&mut self, filter: &Filter) {
        // an unresolved path yields an empty result, never an error
        if self.vault.folder_by_path(filter.path()).is_none() {
            return;
        }
        let (files, folders) = self.vault.children_of(filter.path());
        self.base_files = files;
        self.base_folders = folders;
    }

    fn handle_tag(&mut self, filter: &Filter) {
        if let Some(tag) = filter.first_tag() {
            self.base_files = self.tag_index.files_for_tag(tag).to_vec();
        }
    }

    fn handle_command(&mut self, filter: &Filter) {
        match filter.command() {
            Command::GenLink => {
                // command invocations bypass the tag browser, so the index
                // may be stale; re-derive it before resolving the tag
                self.tag_index.rebuild(&self.vault);
                self.handle_tag(filter);
            }
            Command::Undefined => {}
        }
    }

    /// Derive the visible, ordered set from the cached base.
    fn emit(&self, filter: &Filter) -> ResultSet {
        let mut folders = if filter.show_folder() {
            self.base_folders.clone()
        } else {
            Vec::new()
        };
        sort_folders(&mut folders);

        let mut files: Vec<FileEntry> = self
            .base_files
            .iter()
            .filter(|f| {
                (is_document(f) && filter.show_md_and_canvas())
                    || (is_attachment(f) && filter.show_attachment())
            })
            .cloned()
            .collect();
        if filter.property() == NAME_PROPERTY {
            sort_files(&mut files);
        } else {
            files = sort_files_by_property(files, |file| self.property_of(file, filter.property()));
        }

        if !filter.sort_ascending() {
            files.reverse();
            folders.reverse();
        }

        ResultSet { files, folders }
    }

    fn property_of(&self, file: &FileEntry, property: &str) -> Option<PropValue> {
        self.vault
            .metadata(&file.path)?
            .frontmatter
            .get(property)
            .cloned()
    }

    /// Attachments no document links to or embeds.
    ///
    /// Containment is by substring: an attachment counts as linked when any
    /// collected target string contains its basename or its full path.
    fn unlinked_attachments(&self) -> Vec<FileEntry> {
        let mut targets: Vec<String> = Vec::new();
        for doc in self.vault.documents() {
            if let Some(meta) = self.vault.metadata(&doc.path) {
                targets.extend(meta.links);
                targets.extend(meta.embeds);
            }
        }
        self.vault
            .files()
            .into_iter()
            .filter(is_attachment)
            .filter(|a| {
                !targets
                    .iter()
                    .any(|t| t.contains(&a.basename) || t.contains(&a.path))
            })
            .collect()
    }

    // --- tag surface ---

    /// All tag names, freshly derived from the vault.
    pub fn tag_names(&mut self) -> Vec<String> {
        self.tag_index.rebuild(&self.vault);
        self.tag_index.tag_names()
    }

    pub fn tag_file_count(&self, tag: &str) -> usize {
        self.tag_index.file_count_for_tag(tag)
    }

    /// Render one `- [[basename]]` line per file carrying `tag`, skipping
    /// the active file. Empty string when the tag has no other files.
    pub fn tag_links(&mut self, tag: &str, active_path: &str) -> String {
        let mut filter = Filter::command_filter(Command::GenLink);
        filter.set_tags([tag]);
        filter.set_action(Action::Command);

        let result = self.query_by_filter(&filter);
        result
            .files
            .iter()
            .filter(|f| f.path != active_path)
            .map(|f| format!("- [[{}]]", f.basename))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // --- tallies ---

    /// Counts over a folder's direct children. Missing folder → zero tally.
    pub fn tally_folder(&self, path: &str) -> FileTally {
        if self.vault.folder_by_path(path).is_none() {
            return FileTally::default();
        }
        let (files, folders) = self.vault.children_of(path);
        let mut tally = Self::tally_files(&files);
        tally.folders = folders.len();
        tally
    }

    /// Counts over the whole vault.
    pub fn tally_vault(&self) -> FileTally {
        let mut tally = Self::tally_files(&self.vault.files());
        tally.folders = self.vault.folders().len();
        tally
    }

    fn tally_files(files: &[FileEntry]) -> FileTally {
        let mut tally = FileTally::default();
        for file in files {
            if is_md(file) {
                tally.md_files += 1;
            } else if is_document(file) {
                tally.canvas_files += 1;
            } else {
                tally.attachment_files += 1;
            }
        }
        tally
    }

    // --- persistence ---

    /// Merge `updates` into a document's front-matter and write it back.
    pub fn save_file_frontmatter(
        &self,
        path: &str,
        updates: &std::collections::BTreeMap<String, PropValue>,
    ) -> Result<FrontmatterWrite> {
        let outcome = frontmatter::save_file_frontmatter(&self.vault, path, updates)?;
        debug!("front-matter {:?} for {}", outcome, path);
        Ok(outcome)
    }
}
