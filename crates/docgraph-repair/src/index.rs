//! Root index generation and index-based orphan remediation.
//!
//! When a scan finds no root index document, `--fix` creates one: a table
//! of contents grouped by directory, alphabetically sorted within each
//! group. Orphans can additionally be appended to the index so they gain
//! an incoming edge on the next scan.

use docgraph_core::{Result, ScanOptions};
use docgraph_store::DocumentStore;
use std::collections::BTreeMap;

const ADDITIONAL_SECTION: &str = "## Additional Documents";

/// Generate the content of a root index document from the store: one
/// section per directory ("Root" for root-level documents), entries sorted
/// by path within each section.
pub fn generate_index(store: &DocumentStore) -> String {
    let mut structure: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();

    for (path, doc) in store.iter() {
        structure
            .entry(doc.parent_dir())
            .or_default()
            .push((path, &doc.title));
    }

    let mut sections = String::new();
    // "." sorts before any directory name, so Root comes first
    for (dir, mut entries) in structure {
        let display = if dir == "." { "Root" } else { dir };
        sections.push_str(&format!("\n### {}\n\n", display));

        entries.sort_by_key(|(path, _)| *path);
        for (path, title) in entries {
            sections.push_str(&format!("- [{}]({})\n", title, path));
        }
    }

    format!(
        "# Documentation Index\n\n\
         Links to every documentation section, grouped by directory.\n\n\
         ## Documentation Structure\n{}\n---\n\
         *Generated by docgraph.*\n",
        sections
    )
}

/// Create the root index document if it is missing. Returns whether a file
/// was written.
pub fn create_missing_index(store: &DocumentStore, options: &ScanOptions) -> Result<bool> {
    if store.contains(&options.index_name) {
        return Ok(false);
    }

    log::info!("creating missing {}", options.index_name);
    store.write_document(&options.index_name, &generate_index(store))?;
    Ok(true)
}

/// Append orphaned documents to the root index under an "Additional
/// Documents" section, creating the index first when absent. Documents
/// already referenced anywhere in the index are skipped. Returns whether
/// the index was written.
pub fn add_orphans_to_index(
    store: &DocumentStore,
    options: &ScanOptions,
    orphans: &[String],
) -> Result<bool> {
    let mut content = if store.contains(&options.index_name) {
        store.read_document(&options.index_name)?
    } else {
        generate_index(store)
    };
    let original = content.clone();

    let missing: Vec<&String> = orphans
        .iter()
        .filter(|orphan| !content.contains(&format!("]({})", orphan)))
        .collect();

    if !missing.is_empty() {
        if !content.contains(ADDITIONAL_SECTION) {
            if !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("\n{}\n", ADDITIONAL_SECTION));
        }
        for orphan in missing {
            let title = store
                .get(orphan)
                .map(|doc| doc.title.as_str())
                .unwrap_or("Untitled");
            content.push_str(&format!("- [{}]({})\n", title, orphan));
        }
    }

    if content == original && store.contains(&options.index_name) {
        return Ok(false);
    }

    store.write_document(&options.index_name, &content)?;
    Ok(true)
}
