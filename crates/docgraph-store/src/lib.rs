//! # docgraph-store
//!
//! Document Store: recursive directory walk, per-file parse dispatch, and
//! the atomic write path used by repairs.
//!
//! One scan invocation builds the whole store fresh; there is no persistent
//! cache and no incremental update model. Per-file read failures are counted
//! and skipped, never fatal; only an unreadable root aborts the scan.

pub mod store;
pub mod write;

pub use store::DocumentStore;
pub use write::write_atomic;
