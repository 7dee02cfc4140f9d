//! Structural defect detection and health scoring.
//!
//! The analyzer consumes a completed [`DocumentStore`] and produces the
//! orphan set and broken-link set; the scorer converts those aggregate
//! counts into a 0-100 composite score with letter grade.

use crate::graph::DocGraph;
use docgraph_core::ScanOptions;
use docgraph_store::DocumentStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A link whose anchor-stripped target is not a known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Document containing the broken link
    pub source: String,
    /// Target as resolved, anchor fragment retained for display
    pub target: String,
    /// Target exactly as written in the source document; repairs
    /// substitute this form
    pub raw: String,
    /// The visible link label
    pub text: String,
}

/// Output of one analysis pass over a completed store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Documents with no incoming edges, sorted, root names excluded
    pub orphans: Vec<String>,
    /// Broken links in document order
    pub broken_links: Vec<BrokenLink>,
}

/// Derives orphan and broken-link sets from the document store.
pub struct GraphAnalyzer<'a> {
    store: &'a DocumentStore,
    options: &'a ScanOptions,
}

impl<'a> GraphAnalyzer<'a> {
    pub fn new(store: &'a DocumentStore, options: &'a ScanOptions) -> Self {
        Self { store, options }
    }

    /// Run the full analysis: build the reverse-link graph, then derive
    /// orphans and broken links.
    pub fn analyze(&self) -> AnalysisReport {
        let graph = DocGraph::build(self.store);

        let orphans = graph.orphans(self.store, self.options);
        let broken_links = self.find_broken_links();

        log::info!(
            "analysis: {} orphans, {} broken links across {} documents",
            orphans.len(),
            broken_links.len(),
            self.store.len()
        );

        AnalysisReport {
            orphans,
            broken_links,
        }
    }

    /// A link is broken iff its anchor-stripped target is non-empty and not
    /// a store key. Anchor-only self references are never broken.
    fn find_broken_links(&self) -> Vec<BrokenLink> {
        let mut broken = Vec::new();

        for (source, doc) in self.store.iter() {
            for link in &doc.links {
                let target = link.target_path();
                if !target.is_empty() && !self.store.contains(target) {
                    broken.push(BrokenLink {
                        source: source.clone(),
                        target: link.target.clone(),
                        raw: link.raw.clone(),
                        text: link.text.clone(),
                    });
                }
            }
        }

        broken
    }
}

/// Letter grade bands, inclusive at the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Composite health report for one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub total_documents: usize,
    pub orphaned_documents: usize,
    pub broken_links: usize,
    /// Integer average of word counts, 0 for an empty store
    pub avg_word_count: usize,
    /// True when no document exists at the conventional root index path
    pub missing_index: bool,
    /// 0-100, higher is healthier
    pub score: u8,
    pub grade: Grade,
}

impl HealthMetrics {
    /// Score the store given the analyzer's output.
    ///
    /// Starting from 100: orphan ratio costs up to 30 points, broken-link
    /// ratio (against three links per document) up to 20, and a missing
    /// root index a flat 20. Clamped to [0, 100] and rounded.
    pub fn compute(
        store: &DocumentStore,
        options: &ScanOptions,
        report: &AnalysisReport,
    ) -> Self {
        let total = store.len();
        let orphaned = report.orphans.len();
        let broken = report.broken_links.len();

        let avg_word_count = store.total_words() / total.max(1);
        let missing_index = !store.contains(&options.index_name);

        let mut value = 100.0f64;
        if total > 0 {
            value -= (orphaned as f64 / total as f64) * 30.0;
            value -= (broken as f64 / (total * 3).max(1) as f64) * 20.0;
        }
        if missing_index {
            value -= 20.0;
        }

        let score = value.clamp(0.0, 100.0).round() as u8;

        Self {
            total_documents: total,
            orphaned_documents: orphaned,
            broken_links: broken,
            avg_word_count,
            missing_index,
            score,
            grade: Grade::from_score(score),
        }
    }
}
