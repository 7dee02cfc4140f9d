//! # docgraph
//!
//! Top-level orchestration for the documentation graph analyzer: one
//! [`ScanSession`] per invocation ties the store, analyzer, scorer, and
//! repair engine together, and [`render`] turns the results into the
//! human-readable report.

pub mod render;
pub mod session;

pub use session::{FixSummary, ScanSession};
