//! Parent-document suggestions for orphans.
//!
//! Heuristic, not graph-based: an orphan's most plausible parents are index
//! or readme documents in its own directory, then anything in the directory
//! above.

use docgraph_core::paths;
use docgraph_store::DocumentStore;

const MAX_SUGGESTIONS: usize = 3;

/// Suggest up to three documents that could plausibly link to the orphan.
pub fn suggest_parents(orphan: &str, store: &DocumentStore) -> Vec<String> {
    let orphan_dir = paths::parent_dir(orphan);
    let mut suggestions: Vec<String> = Vec::new();

    // Index-style documents in the orphan's own directory
    for (path, doc) in store.iter() {
        if path == orphan {
            continue;
        }
        let name = doc.file_name();
        if doc.parent_dir() == orphan_dir && (name.contains("index") || name.contains("README")) {
            suggestions.push(path.clone());
        }
    }

    // Documents one directory up
    if orphan_dir != "." {
        let parent_dir = paths::parent_dir(orphan_dir);
        for path in store.paths() {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            if paths::parent_dir(path) == parent_dir && !suggestions.contains(path) {
                suggestions.push(path.clone());
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
