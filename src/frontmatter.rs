//! Front-matter parsing and persistence.
//!
//! A document's front-matter is the leading `---` fenced YAML block. Updates
//! merge onto the existing mapping key by key; keys the caller does not name
//! are preserved verbatim at the YAML level, even kinds the property model
//! cannot represent (booleans, lists, nested maps).
//!
//! [`upsert_front_matter`] is the pure transform over a content string;
//! [`save_file_frontmatter`] wraps it with the vault read/write round trip.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::props::PropValue;
use crate::vault::Vault;

/// Whether a front-matter write merged into an existing block or created one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterWrite {
    Updated,
    Created,
}

/// Split content into the front-matter YAML source and the remainder.
///
/// The block must open at the very first byte; a `---` fence later in the
/// document is plain content.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let body = content.strip_prefix("---\n")?;
    let end = body.find("\n---")?;
    Some((&body[..end], &body[end + "\n---".len()..]))
}

/// Merge `updates` into the content's front-matter block.
///
/// Returns the rewritten content and whether the block already existed. An
/// unparseable existing block is an error; the content is left for the host
/// to surface, never silently overwritten.
pub fn upsert_front_matter(
    content: &str,
    updates: &BTreeMap<String, PropValue>,
) -> Result<(String, FrontmatterWrite)> {
    match split_block(content) {
        Some((yaml_src, rest)) => {
            let mut mapping: Mapping = if yaml_src.trim().is_empty() {
                Mapping::new()
            } else {
                serde_yaml::from_str(yaml_src)?
            };
            for (key, value) in updates {
                mapping.insert(Value::String(key.clone()), value.to_yaml());
            }
            let yaml = serde_yaml::to_string(&mapping)?;
            Ok((format!("---\n{yaml}---{rest}"), FrontmatterWrite::Updated))
        }
        None => {
            let mut mapping = Mapping::new();
            for (key, value) in updates {
                mapping.insert(Value::String(key.clone()), value.to_yaml());
            }
            let yaml = serde_yaml::to_string(&mapping)?;
            Ok((
                format!("---\n{yaml}---\n\n{content}"),
                FrontmatterWrite::Created,
            ))
        }
    }
}

/// Read a file, merge `updates` into its front-matter, and write it back.
pub fn save_file_frontmatter<V: Vault>(
    vault: &V,
    path: &str,
    updates: &BTreeMap<String, PropValue>,
) -> Result<FrontmatterWrite> {
    let content = vault.read_content(path)?;
    let (rewritten, outcome) = upsert_front_matter(&content, updates)?;
    vault.write_content(path, &rewritten)?;
    Ok(outcome)
}

/// Parse the front-matter block into property values.
///
/// Keys whose values have no property representation are skipped. Missing
/// or unparseable blocks yield an empty map.
pub fn read_front_matter(content: &str) -> BTreeMap<String, PropValue> {
    let Some((yaml_src, _)) = split_block(content) else {
        return BTreeMap::new();
    };
    let Ok(mapping) = serde_yaml::from_str::<Mapping>(yaml_src) else {
        return BTreeMap::new();
    };
    mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let key = key.as_str()?.to_string();
            PropValue::from_yaml(&value).map(|v| (key, v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileXError;
    use crate::vault::InMemoryVault;

    fn updates(pairs: &[(&str, PropValue)]) -> BTreeMap<String, PropValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn merge_preserves_unrelated_keys() {
        let content = "---\nauthor: jane\ndraft: true\n---\n\nbody text\n";
        let (rewritten, outcome) =
            upsert_front_matter(content, &updates(&[("priority", PropValue::Number(2.0))]))
                .unwrap();

        assert_eq!(outcome, FrontmatterWrite::Updated);
        assert!(rewritten.contains("author: jane"));
        assert!(rewritten.contains("draft: true"));
        assert!(rewritten.contains("priority: 2"));
        assert!(rewritten.ends_with("body text\n"));
    }

    #[test]
    fn merge_overwrites_named_keys() {
        let content = "---\npriority: 1\n---\nbody";
        let (rewritten, _) =
            upsert_front_matter(content, &updates(&[("priority", PropValue::Number(3.0))]))
                .unwrap();

        assert!(rewritten.contains("priority: 3"));
        assert!(!rewritten.contains("priority: 1"));
    }

    #[test]
    fn absent_block_is_prepended() {
        let content = "just a note\n";
        let (rewritten, outcome) =
            upsert_front_matter(content, &updates(&[("author", PropValue::text("jane"))]))
                .unwrap();

        assert_eq!(outcome, FrontmatterWrite::Created);
        assert!(rewritten.starts_with("---\nauthor: jane\n---\n\n"));
        assert!(rewritten.ends_with("just a note\n"));
    }

    #[test]
    fn fence_later_in_the_document_is_content() {
        let content = "intro\n---\nnot front-matter\n";
        let (_, outcome) = upsert_front_matter(content, &BTreeMap::new()).unwrap();
        assert_eq!(outcome, FrontmatterWrite::Created);
    }

    #[test]
    fn unparseable_block_is_an_error() {
        let content = "---\n: : :\nnot yaml [\n---\nbody";
        let result = upsert_front_matter(content, &BTreeMap::new());
        assert!(matches!(result, Err(FileXError::Yaml(_))));
    }

    #[test]
    fn read_round_trips_representable_values() {
        let content = "---\nauthor: jane\npriority: 2\ndraft: true\n---\nbody";
        let props = read_front_matter(content);

        assert_eq!(props.get("author"), Some(&PropValue::text("jane")));
        assert_eq!(props.get("priority"), Some(&PropValue::Number(2.0)));
        assert!(!props.contains_key("draft"));
    }

    #[test]
    fn save_reads_merges_and_writes() {
        let vault = InMemoryVault::new();
        vault.add_file_with_content("note.md", "---\nauthor: jane\n---\nbody");

        let outcome = save_file_frontmatter(
            &vault,
            "note.md",
            &updates(&[("priority", PropValue::Number(1.0))]),
        )
        .unwrap();

        assert_eq!(outcome, FrontmatterWrite::Updated);
        let content = vault.read_content("note.md").unwrap();
        assert!(content.contains("author: jane"));
        assert!(content.contains("priority: 1"));
    }

    #[test]
    fn save_on_missing_file_is_not_found() {
        let vault = InMemoryVault::new();
        let result = save_file_frontmatter(&vault, "ghost.md", &BTreeMap::new());
        assert!(matches!(result, Err(FileXError::FileNotFound(_))));
    }
}
