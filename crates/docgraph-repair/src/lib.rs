//! # docgraph-repair
//!
//! Automated repair of structural defects found by the graph analyzer.
//!
//! ## Broken link repair
//!
//! Each broken link goes through an ordered cascade of matching strategies,
//! first acceptance wins:
//!
//! 1. Exact filename match (deterministic tie-break: shallowest, shortest,
//!    lexicographic)
//! 2. Title/filename similarity above a configurable threshold
//! 3. Archive fallback (`archive/<target>` probe)
//!
//! Accepted repairs are rewritten as paths relative to the source
//! document's directory and applied as batched, atomic, change-only writes.
//! Links no strategy resolves stay broken and are reported as unresolved.
//!
//! ## Index remediation
//!
//! A missing root index can be generated from the directory structure, and
//! orphans can be appended to it so they gain an incoming edge.

pub mod engine;
pub mod index;
pub mod matchers;
pub mod suggest;

pub use engine::{RepairEngine, RepairOutcome, RepairedLink};
pub use index::{add_orphans_to_index, create_missing_index, generate_index};
pub use matchers::{
    ArchiveFallbackMatcher, ExactFilenameMatcher, MatchCandidate, MatchStrategy, Matcher,
    SimilarityMatcher,
};
pub use suggest::suggest_parents;
