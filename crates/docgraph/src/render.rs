//! Human-readable report rendering.
//!
//! Reports go to stdout; diagnostics go through `log`. Each block is an
//! emoji-tagged heading followed by indented detail lines, terminal-friendly
//! and stable enough to grep.

use crate::{FixSummary, ScanSession};
use docgraph_core::ScanStats;
use docgraph_graph::{AnalysisReport, HealthMetrics};
use docgraph_repair::suggest_parents;

/// The scan results block.
pub fn print_scan_results(stats: &ScanStats) {
    println!("\n📊 Scan Results:");
    println!("  Total documents: {}", stats.total_documents);
    println!("  Orphaned documents: {}", stats.orphaned_documents);
    println!("  Broken links: {}", stats.broken_links);
    println!("  Directories: {}", stats.directories);
    if stats.parse_failures > 0 {
        println!("  Unreadable (skipped): {}", stats.parse_failures);
    }
}

/// Verbose per-document breakdown: orphan titles and the largest documents.
pub fn print_detailed(session: &ScanSession) {
    let report = session.report();

    if !report.orphans.is_empty() {
        println!("\n🔍 Orphaned documents:");
        for orphan in &report.orphans {
            let title = session
                .store()
                .get(orphan)
                .map(|doc| doc.title.as_str())
                .unwrap_or("Untitled");
            println!("  - {} (\"{}\")", orphan, title);
        }
    }

    let mut by_size: Vec<_> = session.store().iter().collect();
    by_size.sort_by(|a, b| b.1.word_count.cmp(&a.1.word_count));

    println!("\n📈 Document statistics:");
    println!("  Largest documents:");
    for (path, doc) in by_size.into_iter().take(5) {
        println!("    - {} ({} words)", path, doc.word_count);
    }
}

/// Explicit broken-link table.
pub fn print_link_validation(report: &AnalysisReport) {
    println!("\n🔗 Validating links...");

    if report.broken_links.is_empty() {
        println!("✅ All links are valid!");
    } else {
        println!("\n❌ Broken links found:");
        for broken in &report.broken_links {
            println!(
                "  {} → {} (\"{}\")",
                broken.source, broken.target, broken.text
            );
        }
    }
}

/// Outcome of a repair pass.
pub fn print_fix_summary(summary: &FixSummary) {
    println!("\n🔧 Fix results:");
    if summary.index_created {
        println!("  Created missing root index");
    }
    for repaired in &summary.repairs.repaired {
        println!(
            "  Fixed ({}): {} → {} in {}",
            repaired.strategy.description(),
            repaired.old_target,
            repaired.new_target,
            repaired.source
        );
    }
    for broken in &summary.repairs.unresolved {
        println!("  Not fixed: {} in {}", broken.target, broken.source);
    }
    for file in &summary.repairs.failed_files {
        println!("  Could not rewrite: {}", file);
    }
    println!(
        "  {} links fixed, {} unresolved, {} files updated",
        summary.repairs.repaired.len(),
        summary.repairs.unresolved.len(),
        summary.repairs.files_updated
    );
}

/// The health report block.
pub fn print_health(metrics: &HealthMetrics) {
    println!("\n📊 Documentation Health Report");
    println!("Overall Score: {}/100 ({})", metrics.score, metrics.grade);
    println!(
        "- Structure: {} Index file",
        if metrics.missing_index { "❌" } else { "✅" }
    );
    println!(
        "- Linking: {} {} broken links",
        if metrics.broken_links == 0 { "✅" } else { "⚠️" },
        metrics.broken_links
    );
    println!(
        "- Coverage: {} {} orphaned docs",
        if metrics.orphaned_documents == 0 { "✅" } else { "⚠️" },
        metrics.orphaned_documents
    );
    println!("- Content: {} avg words per doc", metrics.avg_word_count);
}

/// Per-orphan listing with optional parent suggestions.
pub fn print_orphans(session: &ScanSession, suggest: bool) {
    let orphans = &session.report().orphans;
    println!("\n🔍 Found {} orphaned documents\n", orphans.len());

    for orphan in orphans {
        println!("📄 {}", orphan);
        if let Some(doc) = session.store().get(orphan) {
            println!("   Title: \"{}\"", doc.title);
            println!("   Words: {}", doc.word_count);
            println!("   Last modified: {}", doc.last_modified.format("%Y-%m-%d"));
        }

        if suggest {
            let suggestions = suggest_parents(orphan, session.store());
            if !suggestions.is_empty() {
                println!("   Suggested parents:");
                for suggestion in suggestions {
                    println!("     - {}", suggestion);
                }
            }
        }
        println!();
    }
}
