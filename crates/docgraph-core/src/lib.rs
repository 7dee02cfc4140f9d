//! # docgraph-core
//!
//! Core data models, error types, and scan configuration for the docgraph
//! documentation analyzer. This crate defines the canonical types that all
//! other crates depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Parsed document types ([`Document`], [`LinkRef`], [`Heading`])
//! - [`error`] - Error types and the crate-wide [`Result`] alias
//! - [`options`] - Scan session configuration with builder and validation
//! - [`paths`] - Lexical path math for root-relative document keys
//!
//! ## Design
//!
//! - Every document is keyed by a root-relative, forward-slash normalized
//!   path; keys never contain backslashes or a leading `./`.
//! - All fallible operations return [`Result`]; libraries never panic.
//! - A scan session rebuilds all state from scratch; nothing here persists
//!   across runs.

pub mod error;
pub mod models;
pub mod options;
pub mod paths;

pub use error::{Error, Result};
pub use models::{Document, Heading, LinkKind, LinkRef, ScanStats};
pub use options::{ScanOptions, ScanOptionsBuilder};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{Document, Heading, LinkKind, LinkRef, ScanStats};
    pub use crate::options::ScanOptions;
}
