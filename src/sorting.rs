//! Pure sort and classification primitives.
//!
//! Everything here is a plain function over entry descriptors; nothing
//! touches the vault except [`sort_files_by_property`], which receives a
//! metadata lookup closure so it stays testable without a vault.
//!
//! ## Ordering rules
//!
//! Name ordering ([`natural_cmp`]) puts entries whose name starts with a
//! digit or symbol before entries starting with an ASCII letter, then
//! compares case-insensitively. File ordering puts documents (markdown,
//! then canvas) before attachments. All sorts are stable: re-sorting an
//! already ordered list is a no-op.

use std::cmp::Ordering;

use crate::model::{FileEntry, FolderEntry};
use crate::props::PropValue;
use crate::tag_index::NO_TAG;

/// Sort key used when no front-matter property is selected.
pub const NAME_PROPERTY: &str = "name";

pub fn is_md(file: &FileEntry) -> bool {
    file.extension == "md"
}

pub fn is_canvas(file: &FileEntry) -> bool {
    file.extension == "canvas"
}

/// True for the two document kinds the vault edits natively.
pub fn is_document(file: &FileEntry) -> bool {
    is_md(file) || is_canvas(file)
}

pub fn is_attachment(file: &FileEntry) -> bool {
    !is_document(file)
}

/// Name comparison: non-letter-first, then case-insensitive.
///
/// Strings whose first character is an ASCII letter sort after strings
/// whose first character is not, so digits and symbols lead. Ties are
/// broken by lowercased comparison, with the raw string as final tiebreak.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_letter = a.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let b_letter = b.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    match (a_letter, b_letter) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => caseless_cmp(a, b),
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order tag names for display: the no-tag bucket always last, shorter
/// tags before longer ones, ties by [`natural_cmp`].
pub fn sort_tags(tags: &mut Vec<String>) {
    tags.sort_by(|a, b| {
        if a == NO_TAG {
            return Ordering::Greater;
        }
        if b == NO_TAG {
            return Ordering::Less;
        }
        a.len().cmp(&b.len()).then_with(|| natural_cmp(a, b))
    });
}

pub fn sort_folders(folders: &mut [FolderEntry]) {
    folders.sort_by(|a, b| natural_cmp(&a.name, &b.name));
}

/// Order files for display: markdown first, then canvas, then remaining
/// extensions lexicographically, then case-insensitive name.
pub fn sort_files(files: &mut [FileEntry]) {
    files.sort_by(file_cmp);
}

fn file_cmp(a: &FileEntry, b: &FileEntry) -> Ordering {
    if is_md(a) != is_md(b) {
        return if is_md(a) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if is_canvas(a) != is_canvas(b) {
        return if is_canvas(a) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    a.extension
        .cmp(&b.extension)
        .then_with(|| caseless_cmp(&a.name, &b.name))
}

/// Order files by a front-matter property.
///
/// `lookup` reads the property value for one file. Files lacking the
/// property sort after files carrying it; values of the same kind compare
/// per [`PropValue::cmp_same_kind`]; absent or mixed-kind values fall back
/// to case-insensitive name comparison, which is also the tiebreak.
pub fn sort_files_by_property<F>(files: Vec<FileEntry>, lookup: F) -> Vec<FileEntry>
where
    F: Fn(&FileEntry) -> Option<PropValue>,
{
    let mut keyed: Vec<(Option<PropValue>, FileEntry)> = files
        .into_iter()
        .map(|file| (lookup(&file), file))
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| {
        let by_name = || caseless_cmp(&a.name, &b.name);
        match (ka, kb) {
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => by_name(),
            (Some(va), Some(vb)) => match va.cmp_same_kind(vb) {
                Some(Ordering::Equal) | None => by_name(),
                Some(order) => order,
            },
        }
    });

    keyed.into_iter().map(|(_, file)| file).collect()
}
