//! One scan session: store, analysis, scoring, and optional repairs.
//!
//! All per-run state lives on the session and starts empty at construction;
//! there is no hidden global state and nothing persists across runs. A
//! repair pass mutates document files in place, then refreshes the session
//! by rescanning so callers always observe post-repair state.

use docgraph_core::{Result, ScanOptions, ScanStats};
use docgraph_graph::{AnalysisReport, GraphAnalyzer, HealthMetrics};
use docgraph_repair::{RepairEngine, RepairOutcome, create_missing_index};
use docgraph_store::DocumentStore;
use serde::{Deserialize, Serialize};

/// What a `fix` pass did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixSummary {
    /// Whether a missing root index document was generated
    pub index_created: bool,
    /// Broken-link repair results
    pub repairs: RepairOutcome,
}

/// One complete scan: walk, parse, analyze.
pub struct ScanSession {
    options: ScanOptions,
    store: DocumentStore,
    report: AnalysisReport,
}

impl ScanSession {
    /// Run a full scan. Fails only on setup errors (unreadable root);
    /// per-document failures are counted and the scan completes.
    pub fn run(options: ScanOptions) -> Result<Self> {
        let store = DocumentStore::scan(&options)?;
        let report = GraphAnalyzer::new(&store, &options).analyze();
        Ok(Self {
            options,
            store,
            report,
        })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    /// Aggregate counts for the scan results block.
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            total_documents: self.store.len(),
            orphaned_documents: self.report.orphans.len(),
            broken_links: self.report.broken_links.len(),
            directories: self.store.directories(),
            parse_failures: self.store.parse_failures(),
        }
    }

    /// Composite health report for the current state.
    pub fn health(&self) -> HealthMetrics {
        HealthMetrics::compute(&self.store, &self.options, &self.report)
    }

    /// Run the repair pass: generate a missing root index, then attempt to
    /// rewrite every broken link. The session is rescanned afterwards so
    /// its state reflects the mutated files.
    pub fn fix(&mut self) -> Result<FixSummary> {
        let index_created = create_missing_index(&self.store, &self.options)?;

        let engine = RepairEngine::new(&self.options);
        let repairs = engine.repair(&self.store, &self.report.broken_links);

        if index_created || repairs.files_updated > 0 {
            let refreshed = ScanSession::run(self.options.clone())?;
            self.store = refreshed.store;
            self.report = refreshed.report;
        }

        Ok(FixSummary {
            index_created,
            repairs,
        })
    }
}
