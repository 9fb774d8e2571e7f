//! # View State: the Filter
//!
//! A [`Filter`] is the declarative description of what the panel should be
//! showing: search text, browsing segment, selected tags, folder path,
//! visibility toggles, and sort configuration. The UI owns one instance
//! for the lifetime of a view session and passes it by reference into the
//! engine on every interaction.
//!
//! ## Action tagging
//!
//! Every state transition carries an [`Action`] kind that records *why*
//! the filter last changed. Query-affecting changes (search text, segment,
//! tags, path, command) are tagged with their own kind; view-only changes
//! (visibility toggles, sort configuration) are tagged `Show`/`Sort`. The
//! engine reads nothing but this tag to decide between re-running a query
//! handler and reusing its cached base result.
//!
//! Transitions go through the explicit [`FilterChange`] union and the
//! [`Filter::apply`] reducer, which returns whether the change requires a
//! requery. The named setters are thin wrappers over `apply`, so hosts
//! can use either style without the two drifting apart.

use crate::model::ROOT_PATH;
use crate::sorting::NAME_PROPERTY;

/// Coarse browsing mode selecting the base population strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Direct children of the vault root.
    Vault,
    /// All folders exactly two path segments deep.
    FolderL2,
    /// Every file in the vault.
    AllFiles,
    /// Attachments no document links to.
    UnLinked,
    /// Tag browser; the file set comes from the tag selection.
    Tag,
    /// No segment selected.
    None,
}

/// Why the filter last changed. Drives the engine's dirty check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Segment,
    Folder,
    Tag,
    Command,
    Show,
    Sort,
    Refresh,
    Undefined,
}

impl Action {
    /// True when the engine must re-run a query handler for this kind.
    pub fn is_query_affecting(self) -> bool {
        matches!(
            self,
            Action::Search
                | Action::Segment
                | Action::Folder
                | Action::Tag
                | Action::Command
                | Action::Refresh
        )
    }

    /// True for transitions that only re-derive the view from the cached base.
    pub fn is_view_only(self) -> bool {
        matches!(self, Action::Show | Action::Sort)
    }
}

/// Ad-hoc operations invoked from outside the normal browsing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate wiki links for every file carrying a chosen tag.
    GenLink,
    Undefined,
}

/// The visibility toggles the panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    ShowAttachments,
    ShowMd,
    ShowFolder,
    ShowAmount,
}

/// An explicit, tagged state transition for [`Filter::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Segment(Segment),
    Folder(String),
    Tags(Vec<String>),
    Command(Command),
    Toggle(Checkbox),
    SortKey(String),
    Refresh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    search_text: String,
    segment: Segment,
    action: Action,
    command: Command,
    tags: Vec<String>,
    path: String,
    show_attachment: bool,
    show_md_and_canvas: bool,
    show_folder: bool,
    show_amount: bool,
    sort_ascending: bool,
    property: String,
}

impl Default for Filter {
    /// The panel's initial state: vault root, everything visible except
    /// amount badges, ascending name order.
    fn default() -> Self {
        Self::new(Segment::Vault, Action::Segment, Command::Undefined)
    }
}

impl Filter {
    pub fn new(segment: Segment, action: Action, command: Command) -> Self {
        Self {
            search_text: String::new(),
            segment,
            action,
            command,
            tags: Vec::new(),
            path: ROOT_PATH.to_string(),
            show_attachment: true,
            show_md_and_canvas: true,
            show_folder: true,
            show_amount: false,
            sort_ascending: true,
            property: NAME_PROPERTY.to_string(),
        }
    }

    /// A filter that matches nothing and precedes any real query.
    pub fn undefined() -> Self {
        Self::new(Segment::None, Action::Undefined, Command::Undefined)
    }

    pub fn command_filter(command: Command) -> Self {
        Self::new(Segment::None, Action::Command, command)
    }

    // --- accessors ---

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The single tag the engine honors; selection order wins.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn show_attachment(&self) -> bool {
        self.show_attachment
    }

    pub fn show_md_and_canvas(&self) -> bool {
        self.show_md_and_canvas
    }

    pub fn show_folder(&self) -> bool {
        self.show_folder
    }

    pub fn show_amount(&self) -> bool {
        self.show_amount
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn is_search_text_empty(&self) -> bool {
        self.search_text.is_empty()
    }

    // --- transitions ---

    /// Apply one tagged transition and record its action kind.
    ///
    /// Returns true when the change invalidates the engine's cached base
    /// result (i.e. the recorded action is query-affecting).
    pub fn apply(&mut self, change: FilterChange) -> bool {
        match change {
            FilterChange::Search(text) => {
                self.search_text = text;
                self.action = Action::Search;
            }
            FilterChange::Segment(segment) => {
                self.segment = segment;
                self.action = Action::Segment;
            }
            FilterChange::Folder(path) => {
                self.path = path;
                self.action = Action::Folder;
            }
            FilterChange::Tags(tags) => {
                self.tags = tags;
                self.action = Action::Tag;
            }
            FilterChange::Command(command) => {
                self.command = command;
                self.action = Action::Command;
            }
            FilterChange::Toggle(checkbox) => {
                match checkbox {
                    Checkbox::ShowAttachments => self.show_attachment = !self.show_attachment,
                    Checkbox::ShowMd => self.show_md_and_canvas = !self.show_md_and_canvas,
                    Checkbox::ShowFolder => self.show_folder = !self.show_folder,
                    Checkbox::ShowAmount => self.show_amount = !self.show_amount,
                }
                self.action = Action::Show;
            }
            FilterChange::SortKey(key) => {
                if self.property == key {
                    self.sort_ascending = !self.sort_ascending;
                } else {
                    self.property = key;
                    self.sort_ascending = true;
                }
                self.action = Action::Sort;
            }
            FilterChange::Refresh => {
                self.action = Action::Refresh;
            }
        }
        self.action.is_query_affecting()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.apply(FilterChange::Search(text.into()))
    }

    pub fn set_segment(&mut self, segment: Segment) -> bool {
        self.apply(FilterChange::Segment(segment))
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> bool {
        self.apply(FilterChange::Folder(path.into()))
    }

    pub fn set_tags<I, S>(&mut self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply(FilterChange::Tags(
            tags.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn set_command(&mut self, command: Command) -> bool {
        self.apply(FilterChange::Command(command))
    }

    pub fn toggle_checkbox(&mut self, checkbox: Checkbox) -> bool {
        self.apply(FilterChange::Toggle(checkbox))
    }

    /// Flip direction when `key` is already the sort key, else adopt the
    /// new key ascending.
    pub fn toggle_sort_order(&mut self, key: impl Into<String>) -> bool {
        self.apply(FilterChange::SortKey(key.into()))
    }

    pub fn set_refresh(&mut self) -> bool {
        self.apply(FilterChange::Refresh)
    }

    /// Overwrite the action kind without any field side effect. Hosts use
    /// this to re-tag a filter built through the setters (e.g. a command
    /// filter whose tag selection was just set).
    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    // --- snapshotting ---

    /// Full value copy; the tag list is duplicated, not shared.
    pub fn create_copy(&self) -> Filter {
        self.clone()
    }

    pub fn copy_from(&mut self, other: &Filter) {
        *self = other.clone();
    }

    /// Equality as seen by the engine's cache.
    ///
    /// Returns true immediately when this filter's action is view-only
    /// (the transition cannot describe a different query); otherwise
    /// compares action, search text, segment, path, and the tag sets
    /// order-independently.
    pub fn equality_for_caching(&self, other: &Filter) -> bool {
        if self.action.is_view_only() {
            return true;
        }
        if self.action != other.action
            || self.search_text != other.search_text
            || self.segment != other.segment
            || self.path != other.path
        {
            return false;
        }
        self.tags.len() == other.tags.len()
            && self.tags.iter().all(|tag| other.tags.contains(tag))
    }
}
