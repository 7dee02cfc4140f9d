//! # docgraph-graph
//!
//! Cross-reference graph analysis for documentation trees.
//!
//! Provides:
//! - Directed reference graph over document keys (petgraph)
//! - Reverse-link (backlink) queries
//! - Orphan detection with conventional root-name exclusion
//! - Broken-link detection against the document store
//! - Composite health scoring with letter grades
//!
//! ## Core Concepts
//!
//! - **Nodes**: document keys; targets of missing documents appear as
//!   phantom nodes so in-degree queries stay uniform
//! - **Edges**: one per link occurrence, source to anchor-stripped target
//! - **Orphan**: zero direct inbound edges and not a conventional root name;
//!   transitive reachability is deliberately not considered
//! - **Broken link**: anchor-stripped target absent from the store
//!
//! The whole graph is rebuilt fresh on each scan invocation; there is no
//! incremental update model.

pub mod graph;
pub mod health;

pub use graph::DocGraph;
pub use health::{AnalysisReport, BrokenLink, Grade, GraphAnalyzer, HealthMetrics};

pub mod prelude {
    pub use crate::graph::DocGraph;
    pub use crate::health::{AnalysisReport, BrokenLink, Grade, GraphAnalyzer, HealthMetrics};
}
