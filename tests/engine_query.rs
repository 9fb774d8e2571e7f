use std::collections::BTreeMap;

use filex::engine::QueryEngine;
use filex::filter::{Checkbox, Filter, Segment};
use filex::frontmatter::FrontmatterWrite;
use filex::model::FileMetadata;
use filex::props::PropValue;
use filex::tag_index::NO_TAG;
use filex::vault::{InMemoryVault, Vault};

fn setup() -> QueryEngine<InMemoryVault> {
    let vault = InMemoryVault::new();

    vault.add_file_with_metadata(
        "note.md",
        FileMetadata::default()
            .with_tags(["#work"])
            .with_property("priority", PropValue::Number(2.0))
            .with_embeds(["img.png"]),
    );
    vault.add_file_with_metadata(
        "journal.md",
        FileMetadata::default()
            .with_tags(["#work", "#daily"])
            .with_property("priority", PropValue::Number(1.0)),
    );
    vault.add_file("img.png");
    vault.add_file("orphan.zip");
    vault.add_file("a/inner.md");
    vault.add_folder("B");

    QueryEngine::new(vault)
}

#[test]
fn view_only_transitions_reuse_the_cached_base() {
    let mut engine = setup();
    let mut filter = Filter::default();

    engine.query_by_filter(&filter);
    assert_eq!(engine.base_queries_run(), 1);

    filter.toggle_checkbox(Checkbox::ShowAmount);
    engine.query_by_filter(&filter);
    filter.toggle_sort_order("name");
    engine.query_by_filter(&filter);
    assert_eq!(engine.base_queries_run(), 1);

    filter.set_segment(Segment::AllFiles);
    engine.query_by_filter(&filter);
    assert_eq!(engine.base_queries_run(), 2);
}

#[test]
fn vault_segment_orders_documents_then_attachments() {
    let mut engine = setup();
    let result = engine.query_by_filter(&Filter::default());

    let files: Vec<&str> = result.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(files, vec!["journal.md", "note.md", "img.png", "orphan.zip"]);

    // case folds before comparison, so "a" precedes "B"
    let folders: Vec<&str> = result.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(folders, vec!["a", "B"]);
}

#[test]
fn visibility_toggles_gate_the_emitted_set() {
    let mut engine = setup();
    let mut filter = Filter::default();
    engine.query_by_filter(&filter);

    filter.toggle_checkbox(Checkbox::ShowAttachments);
    let result = engine.query_by_filter(&filter);
    assert!(result.files.iter().all(|f| f.extension == "md"));

    filter.toggle_checkbox(Checkbox::ShowAttachments);
    filter.toggle_checkbox(Checkbox::ShowMd);
    let result = engine.query_by_filter(&filter);
    assert!(result.files.iter().all(|f| f.extension != "md"));

    filter.toggle_checkbox(Checkbox::ShowFolder);
    let result = engine.query_by_filter(&filter);
    assert!(result.folders.is_empty());

    assert_eq!(engine.base_queries_run(), 1);
}

#[test]
fn descending_order_reverses_files_and_folders() {
    let mut engine = setup();
    let mut filter = Filter::default();
    let ascending = engine.query_by_filter(&filter);

    filter.toggle_sort_order("name");
    let descending = engine.query_by_filter(&filter);

    let mut reversed = ascending.files.clone();
    reversed.reverse();
    assert_eq!(descending.files, reversed);

    let mut reversed = ascending.folders.clone();
    reversed.reverse();
    assert_eq!(descending.folders, reversed);
}

#[test]
fn property_sort_orders_by_front_matter_value() {
    let mut engine = setup();
    let mut filter = Filter::default();
    filter.set_segment(Segment::AllFiles);
    engine.query_by_filter(&filter);

    // view-only changes re-derive from the cached base
    filter.toggle_sort_order("priority");
    filter.toggle_checkbox(Checkbox::ShowAttachments);

    let result = engine.query_by_filter(&filter);
    let names: Vec<&str> = result.files.iter().map(|f| f.name.as_str()).collect();
    // priority 1, priority 2, then files without the property by name
    assert_eq!(names, vec!["journal.md", "note.md", "inner.md"]);
    assert_eq!(engine.base_queries_run(), 1);
}

#[test]
fn tag_selection_flow_lists_then_queries() {
    let mut engine = setup();

    let names = engine.tag_names();
    assert_eq!(names, vec!["#work", "#daily", NO_TAG]);
    assert_eq!(engine.tag_file_count("#work"), 2);
    assert_eq!(engine.tag_file_count(NO_TAG), 1);

    let mut filter = Filter::default();
    filter.set_segment(Segment::Tag);
    engine.query_by_filter(&filter);

    filter.set_tags(["#daily"]);
    let result = engine.query_by_filter(&filter);
    let files: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(files, vec!["journal.md"]);
}

#[test]
fn empty_tag_selection_yields_empty_result() {
    let mut engine = setup();
    engine.tag_names();

    let mut filter = Filter::default();
    filter.set_tags(Vec::<String>::new());
    let result = engine.query_by_filter(&filter);
    assert!(result.files.is_empty());
}

#[test]
fn refresh_reruns_the_previous_query_against_the_live_vault() {
    let mut engine = setup();
    let mut filter = Filter::default();
    filter.set_segment(Segment::AllFiles);
    let before = engine.query_by_filter(&filter).files.len();

    engine.vault().add_file("late.md");

    filter.set_refresh();
    let after = engine.query_by_filter(&filter).files.len();
    assert_eq!(after, before + 1);

    // a second refresh re-runs the same query again
    let again = engine.query_by_filter(&filter).files.len();
    assert_eq!(again, after);
}

#[test]
fn unlinked_segment_reports_only_unreferenced_attachments() {
    let mut engine = setup();
    let mut filter = Filter::default();
    filter.set_segment(Segment::UnLinked);

    let result = engine.query_by_filter(&filter);
    let files: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
    // img.png is embedded by note.md, orphan.zip is not referenced anywhere
    assert_eq!(files, vec!["orphan.zip"]);
}

#[test]
fn folder_navigation_lists_children_only() {
    let mut engine = setup();
    let mut filter = Filter::default();
    filter.set_path("a");

    let result = engine.query_by_filter(&filter);
    let files: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(files, vec!["a/inner.md"]);
    assert!(result.folders.is_empty());
}

#[test]
fn tag_links_exclude_the_active_file_and_see_fresh_files() {
    let mut engine = setup();
    engine.tag_names();

    // added after the last explicit rebuild; the command path re-derives
    engine
        .vault()
        .add_file_with_metadata("fresh.md", FileMetadata::default().with_tags(["#work"]));

    let links = engine.tag_links("#work", "note.md");
    assert_eq!(links, "- [[fresh]]\n- [[journal]]");
    assert!(!links.contains("note"));

    assert_eq!(engine.tag_links("#daily", "journal.md"), "");
}

#[test]
fn save_frontmatter_merges_into_existing_block() {
    let engine = setup();
    engine
        .vault()
        .add_file_with_content("tagged.md", "---\nauthor: jane\n---\nbody");

    let mut updates = BTreeMap::new();
    updates.insert("priority".to_string(), PropValue::Number(5.0));

    let outcome = engine.save_file_frontmatter("tagged.md", &updates).unwrap();
    assert_eq!(outcome, FrontmatterWrite::Updated);

    let content = engine.vault().read_content("tagged.md").unwrap();
    assert!(content.contains("author: jane"));
    assert!(content.contains("priority: 5"));
}

#[test]
fn save_frontmatter_surfaces_write_failures() {
    let engine = setup();
    engine.vault().add_file_with_content("x.md", "body");
    engine.vault().set_simulate_write_error(true);

    let mut updates = BTreeMap::new();
    updates.insert("k".to_string(), PropValue::text("v"));

    assert!(engine.save_file_frontmatter("x.md", &updates).is_err());
    // the content is untouched on failure
    assert_eq!(engine.vault().read_content("x.md").unwrap(), "body");
}
