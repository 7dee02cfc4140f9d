//! End-to-end scenarios through `ScanSession` against real temp trees.

use docgraph::ScanSession;
use docgraph_core::ScanOptions;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn session(dir: &TempDir) -> ScanSession {
    ScanSession::run(ScanOptions::new(dir.path())).unwrap()
}

#[test]
fn chain_of_links_leaves_only_the_stray_orphaned() {
    let dir = TempDir::new().unwrap();
    write(&dir, "index.md", "# Docs\n\n[A](a.md)");
    write(&dir, "a.md", "# A\n\n[B](b.md)");
    write(&dir, "b.md", "# B\n\n[C](c.md)");
    write(&dir, "c.md", "# C\n\nLeaf.");
    write(&dir, "stray.md", "# Stray\n\nNobody links here.");

    let session = session(&dir);
    let report = session.report();

    // Linked chain members have incoming edges; the index is exempt
    assert_eq!(report.orphans, vec!["stray.md".to_string()]);
    assert!(report.broken_links.is_empty());

    let health = session.health();
    assert_eq!(health.total_documents, 5);
    // 100 - (1/5)*30 = 94
    assert_eq!(health.score, 94);
}

#[test]
fn moved_document_is_found_and_rewritten_relative_to_source() {
    let dir = TempDir::new().unwrap();
    write(&dir, "index.md", "# Docs\n\n[Guide](guide/start.md)");
    write(&dir, "guide/start.md", "# Start\n\n[Reference](reference.md)");
    write(&dir, "api/reference.md", "# Reference");

    let mut session = session(&dir);
    assert_eq!(session.report().broken_links.len(), 1);

    let summary = session.fix().unwrap();
    assert_eq!(summary.repairs.repaired.len(), 1);
    assert_eq!(summary.repairs.repaired[0].new_target, "../api/reference.md");

    let content = fs::read_to_string(dir.path().join("guide/start.md")).unwrap();
    assert!(content.contains("[Reference](../api/reference.md)"));

    // The refreshed session sees a healthy tree
    assert!(session.report().broken_links.is_empty());
}

#[test]
fn missing_index_costs_twenty_and_fix_generates_it() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.md", "# Alpha\n\n[Beta](b.md)");
    write(&dir, "b.md", "# Beta");

    let mut session = session(&dir);
    let health = session.health();
    assert!(health.missing_index);
    // 2 docs, a.md orphaned: 100 - (1/2)*30 - 20 = 65
    assert_eq!(health.score, 65);

    let summary = session.fix().unwrap();
    assert!(summary.index_created);

    let index = fs::read_to_string(dir.path().join("index.md")).unwrap();
    assert!(index.contains("[Alpha](a.md)"));
    assert!(index.contains("[Beta](b.md)"));

    // Every document is now reachable from the generated index
    let health = session.health();
    assert!(!health.missing_index);
    assert!(session.report().orphans.is_empty());
    assert_eq!(health.score, 100);
}

#[test]
fn generated_index_groups_by_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "overview.md", "# Overview");
    write(&dir, "guide/setup.md", "# Setup");
    write(&dir, "guide/usage.md", "# Usage");

    let mut session = session(&dir);
    session.fix().unwrap();

    let index = fs::read_to_string(dir.path().join("index.md")).unwrap();
    let root_pos = index.find("### Root").unwrap();
    let guide_pos = index.find("### guide").unwrap();
    assert!(root_pos < guide_pos);
    assert!(index.contains("[Setup](guide/setup.md)"));
}

#[test]
fn fix_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.md", "# A\n\n[missing](missing.md)");
    write(&dir, "moved/missing.md", "# Missing");

    let mut session = session(&dir);
    let first = session.fix().unwrap();
    assert!(first.index_created);
    assert_eq!(first.repairs.repaired.len(), 1);

    let second = session.fix().unwrap();
    assert!(!second.index_created);
    assert!(second.repairs.repaired.is_empty());
    assert_eq!(second.repairs.files_updated, 0);
}

#[test]
fn skip_directories_are_not_scanned() {
    let dir = TempDir::new().unwrap();
    write(&dir, "index.md", "# Docs");
    write(&dir, "node_modules/pkg/readme.md", "# Vendored");
    write(&dir, "target/out.md", "# Build output");

    let session = session(&dir);
    assert_eq!(session.store().len(), 1);
    assert!(session.store().contains("index.md"));
}

#[test]
fn external_and_image_links_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "index.md",
        "# Docs\n\n[site](https://example.com)\n![diagram](diagram.png)\n[A](a.md)",
    );
    write(&dir, "a.md", "# A");

    let session = session(&dir);
    assert!(session.report().broken_links.is_empty());
}

#[test]
fn similarity_match_repairs_renamed_document() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "index.md",
        "# Docs\n\n[Installation Guide](install-guide.md)",
    );
    write(&dir, "setup.md", "# Installation Guide");

    let mut session = session(&dir);
    assert_eq!(session.report().broken_links.len(), 1);

    let summary = session.fix().unwrap();
    assert_eq!(summary.repairs.repaired.len(), 1);
    assert_eq!(summary.repairs.repaired[0].resolved_to, "setup.md");
    assert!(session.report().broken_links.is_empty());
}
