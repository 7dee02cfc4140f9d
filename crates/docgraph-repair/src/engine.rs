//! Repair engine: resolve broken links through the matcher cascade and
//! rewrite the owning documents.
//!
//! Rewrites are batched per source file into a single atomic write. The
//! replacement target is recomputed relative to the source document's
//! directory, not the scan root.

use crate::matchers::{
    ArchiveFallbackMatcher, ExactFilenameMatcher, MatchCandidate, Matcher, MatchStrategy,
    SimilarityMatcher,
};
use docgraph_core::{ScanOptions, paths};
use docgraph_graph::BrokenLink;
use docgraph_store::DocumentStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One successfully resolved and rewritten link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairedLink {
    /// Document whose link was rewritten
    pub source: String,
    /// The broken target as it appeared in the link
    pub old_target: String,
    /// The replacement written into the file, relative to the source's
    /// directory
    pub new_target: String,
    /// Store key the link now resolves to
    pub resolved_to: String,
    pub strategy: MatchStrategy,
}

/// Result of one repair pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepairOutcome {
    /// Links rewritten on disk
    pub repaired: Vec<RepairedLink>,
    /// Links no strategy could resolve, plus links whose file could not be
    /// rewritten or no longer contained them
    pub unresolved: Vec<BrokenLink>,
    /// Files actually written (content changed)
    pub files_updated: usize,
    /// Files whose rewrite failed; their repairs were abandoned
    pub failed_files: Vec<String>,
}

/// Applies the matcher cascade to each broken link, first acceptance wins.
pub struct RepairEngine {
    matchers: Vec<Box<dyn Matcher>>,
}

impl RepairEngine {
    /// Build the default cascade: exact filename, then similarity, then
    /// archive fallback.
    pub fn new(options: &ScanOptions) -> Self {
        Self {
            matchers: vec![
                Box::new(ExactFilenameMatcher),
                Box::new(SimilarityMatcher {
                    threshold: options.similarity_threshold,
                    filename_discount: options.filename_discount,
                }),
                Box::new(ArchiveFallbackMatcher {
                    prefix: options.archive_prefix.clone(),
                }),
            ],
        }
    }

    /// Resolve a single broken link through the cascade.
    pub fn resolve(&self, broken: &BrokenLink, store: &DocumentStore) -> Option<MatchCandidate> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.find(broken, store))
    }

    /// Attempt to repair every broken link, mutating source documents in
    /// place. Rewrite failures abandon that file's repairs and report them
    /// as unresolved; other files proceed.
    pub fn repair(&self, store: &DocumentStore, broken_links: &[BrokenLink]) -> RepairOutcome {
        let mut outcome = RepairOutcome::default();

        // Batch matched replacements per source file
        let mut per_file: BTreeMap<String, Vec<(BrokenLink, RepairedLink)>> = BTreeMap::new();

        for broken in broken_links {
            match self.resolve(broken, store) {
                Some(candidate) => {
                    let source_dir = paths::parent_dir(&broken.source);
                    let new_target = paths::relative_from(source_dir, &candidate.path);

                    log::info!(
                        "match ({}): {} -> {}",
                        candidate.strategy.description(),
                        broken.target,
                        candidate.path
                    );

                    let repaired = RepairedLink {
                        source: broken.source.clone(),
                        old_target: broken.target.clone(),
                        new_target,
                        resolved_to: candidate.path,
                        strategy: candidate.strategy,
                    };
                    per_file
                        .entry(broken.source.clone())
                        .or_default()
                        .push((broken.clone(), repaired));
                }
                None => outcome.unresolved.push(broken.clone()),
            }
        }

        for (file, repairs) in per_file {
            // Substitute the target as written in the file, not the
            // resolved form
            let replacements: Vec<(String, String)> = repairs
                .iter()
                .map(|(b, r)| (b.raw.clone(), r.new_target.clone()))
                .collect();

            match store.apply_replacements(&file, &replacements) {
                Ok(true) => {
                    outcome.files_updated += 1;
                    outcome.repaired.extend(repairs.into_iter().map(|(_, r)| r));
                }
                // No substitution landed: the file changed since the scan
                // and no longer contains the broken targets
                Ok(false) => {
                    log::warn!("stale links in {}, nothing rewritten", file);
                    outcome
                        .unresolved
                        .extend(repairs.into_iter().map(|(b, _)| b));
                }
                Err(e) => {
                    log::warn!("abandoning repairs for {}: {}", file, e);
                    outcome.failed_files.push(file);
                    outcome
                        .unresolved
                        .extend(repairs.into_iter().map(|(b, _)| b));
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgraph_graph::GraphAnalyzer;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn scan(dir: &TempDir) -> (DocumentStore, ScanOptions) {
        let options = ScanOptions::new(dir.path());
        let store = DocumentStore::scan(&options).unwrap();
        (store, options)
    }

    #[test]
    fn test_moved_document_rewritten_relative_to_source() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n\nSee [missing](missing.md).");
        write(&dir, "moved/missing.md", "# Missing");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        assert_eq!(report.broken_links.len(), 1);

        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);
        assert_eq!(outcome.repaired.len(), 1);
        assert_eq!(outcome.repaired[0].new_target, "moved/missing.md");
        assert_eq!(outcome.files_updated, 1);

        let content = fs::read_to_string(dir.path().join("a.md")).unwrap();
        assert!(content.contains("[missing](moved/missing.md)"));

        // After repair, a fresh scan sees no broken links
        let (store2, _) = scan(&dir);
        let report2 = GraphAnalyzer::new(&store2, &options).analyze();
        assert!(report2.broken_links.is_empty());
    }

    #[test]
    fn test_repair_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n[missing](missing.md)");
        write(&dir, "moved/missing.md", "# Missing");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        RepairEngine::new(&options).repair(&store, &report.broken_links);

        // Second pass: nothing is broken, nothing is written
        let (store2, _) = scan(&dir);
        let report2 = GraphAnalyzer::new(&store2, &options).analyze();
        let outcome2 = RepairEngine::new(&options).repair(&store2, &report2.broken_links);
        assert!(outcome2.repaired.is_empty());
        assert_eq!(outcome2.files_updated, 0);
    }

    #[test]
    fn test_valid_links_never_altered() {
        let dir = TempDir::new().unwrap();
        let original = "# A\n\n[b](b.md) and [gone](gone.md)";
        write(&dir, "a.md", original);
        write(&dir, "b.md", "# B");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        RepairEngine::new(&options).repair(&store, &report.broken_links);

        let content = fs::read_to_string(dir.path().join("a.md")).unwrap();
        // the valid sibling link is untouched
        assert!(content.contains("[b](b.md)"));
    }

    #[test]
    fn test_unresolved_links_reported() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n[gone](totally-unrelated-zzz.md)");
        write(&dir, "b.md", "# Something Else Entirely");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);

        assert!(outcome.repaired.is_empty());
        assert_eq!(outcome.unresolved.len(), 1);
        assert_eq!(outcome.unresolved[0].target, "totally-unrelated-zzz.md");
    }

    #[test]
    fn test_multiple_repairs_batched_into_one_write() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n[one](one.md)\n[two](two.md)");
        write(&dir, "moved/one.md", "# One");
        write(&dir, "moved/two.md", "# Two");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);

        assert_eq!(outcome.repaired.len(), 2);
        assert_eq!(outcome.files_updated, 1);

        let content = fs::read_to_string(dir.path().join("a.md")).unwrap();
        assert!(content.contains("[one](moved/one.md)"));
        assert!(content.contains("[two](moved/two.md)"));
    }

    #[test]
    fn test_rewrite_failure_abandons_only_that_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n[one](one.md)");
        write(&dir, "b.md", "# B\n[two](two.md)");
        write(&dir, "moved/one.md", "# One");
        write(&dir, "moved/two.md", "# Two");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        assert_eq!(report.broken_links.len(), 2);

        // A directory squatting on a.md's temp path makes its atomic
        // rewrite fail regardless of permissions
        fs::create_dir(dir.path().join("a.tmp")).unwrap();

        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);

        assert_eq!(outcome.failed_files, vec!["a.md".to_string()]);
        assert_eq!(outcome.unresolved.len(), 1);
        assert_eq!(outcome.unresolved[0].source, "a.md");
        assert_eq!(outcome.unresolved[0].target, "one.md");

        // The other file's repair still lands
        assert_eq!(outcome.repaired.len(), 1);
        assert_eq!(outcome.repaired[0].source, "b.md");
        assert_eq!(outcome.files_updated, 1);

        let a = fs::read_to_string(dir.path().join("a.md")).unwrap();
        assert!(a.contains("[one](one.md)"));
        let b = fs::read_to_string(dir.path().join("b.md")).unwrap();
        assert!(b.contains("[two](moved/two.md)"));
    }

    #[test]
    fn test_stale_links_reported_unresolved_not_repaired() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "# A\n[missing](missing.md)");
        write(&dir, "moved/missing.md", "# Missing");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        assert_eq!(report.broken_links.len(), 1);

        // The file changes between scan and repair; the broken target is gone
        fs::write(dir.path().join("a.md"), "# A\nno links now").unwrap();

        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);

        assert!(outcome.repaired.is_empty());
        assert_eq!(outcome.files_updated, 0);
        assert_eq!(outcome.unresolved.len(), 1);
        assert_eq!(outcome.unresolved[0].target, "missing.md");
    }

    #[test]
    fn test_rewrite_relative_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        write(&dir, "guide/a.md", "# A\n[ref](reference.md)");
        write(&dir, "api/reference.md", "# Reference");

        let (store, options) = scan(&dir);
        let report = GraphAnalyzer::new(&store, &options).analyze();
        let outcome = RepairEngine::new(&options).repair(&store, &report.broken_links);

        assert_eq!(outcome.repaired.len(), 1);
        assert_eq!(outcome.repaired[0].new_target, "../api/reference.md");

        let content = fs::read_to_string(dir.path().join("guide/a.md")).unwrap();
        assert!(content.contains("[ref](../api/reference.md)"));
    }
}
