//! # docgraph-parser
//!
//! Link Extractor: turns a document's raw text into its title, headings,
//! and outbound link references.
//!
//! Parsing is line-oriented regex over markdown markers; there is no
//! rendering and no CommonMark AST. The contract is total: malformed
//! content never fails, it just yields fewer extracted items (a missing
//! title becomes the "Untitled" sentinel).

pub mod headings;
pub mod links;

pub use headings::{parse_headings, parse_title};
pub use links::parse_links;

use chrono::{DateTime, Utc};
use docgraph_core::{Document, paths};
use sha2::{Digest, Sha256};

/// Sentinel title for documents without a top-level heading.
pub const UNTITLED: &str = "Untitled";

/// Parse one document into its [`Document`] record.
///
/// `rel_path` is the root-relative, forward-slash normalized key of the
/// document being parsed; link targets are resolved against its directory.
pub fn parse_document(rel_path: &str, content: &str, last_modified: DateTime<Utc>) -> Document {
    let source_dir = paths::parent_dir(rel_path);

    Document {
        path: rel_path.to_string(),
        title: parse_title(content).unwrap_or_else(|| UNTITLED.to_string()),
        headings: parse_headings(content),
        links: parse_links(content, source_dir),
        word_count: content.split_whitespace().count(),
        last_modified,
        content_hash: content_hash(content),
    }
}

/// SHA-256 digest of raw content, used only for change detection.
pub fn content_hash(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    format!("{:x}", hash)
}
