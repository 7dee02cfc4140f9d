//! Core data models for parsed documents and link references.
//!
//! A [`Document`] is one parsed markdown file, keyed by its root-relative,
//! forward-slash normalized path. A [`LinkRef`] is one outbound reference
//! inside a document. External (http/https) links never enter the model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One heading line in a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1-6
    pub level: u8,
    /// Heading text with the marker stripped
    pub text: String,
}

/// Classification of a link target. Informational only: it has no effect
/// on broken-link detection or repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Target contains a `#` fragment pointing at a section
    AnchorOnly,
    /// Relative path (the default)
    Relative,
    /// Path starting at the scan root (`/...`)
    AbsoluteRoot,
}

impl LinkKind {
    /// Classify a raw link target as written in the source document.
    pub fn classify(raw_target: &str) -> Self {
        if raw_target.contains('#') {
            LinkKind::AnchorOnly
        } else if raw_target.starts_with("../") {
            LinkKind::Relative
        } else if raw_target.starts_with('/') {
            LinkKind::AbsoluteRoot
        } else {
            LinkKind::Relative
        }
    }
}

/// One outbound reference inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    /// The visible label
    pub text: String,
    /// Resolved root-relative target. The anchor fragment is retained for
    /// display; existence checks go through [`LinkRef::target_path`].
    pub target: String,
    /// The target exactly as written in the source document. Rewrites
    /// substitute this form, since it is what the file actually contains.
    pub raw: String,
    /// Informational classification of the raw target
    pub kind: LinkKind,
}

impl LinkRef {
    /// The target with any anchor fragment stripped. This is the only form
    /// that may be compared against document store keys. An anchor-only
    /// self reference reduces to the empty string.
    pub fn target_path(&self) -> &str {
        self.target.split('#').next().unwrap_or("")
    }
}

/// One parsed markdown document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Relative path from the scan root, forward-slash normalized; unique key
    pub path: String,
    /// First top-level heading text, or "Untitled"
    pub title: String,
    /// All headings in document order, duplicates allowed
    pub headings: Vec<Heading>,
    /// All internal links in document order
    pub links: Vec<LinkRef>,
    /// Whitespace-separated word count
    pub word_count: usize,
    /// Filesystem modification time
    pub last_modified: DateTime<Utc>,
    /// SHA-256 digest of raw content, used only for change detection
    pub content_hash: String,
}

impl Document {
    /// The bare filename component of this document's path.
    pub fn file_name(&self) -> &str {
        crate::paths::file_name(&self.path)
    }

    /// The directory component of this document's path, `"."` for root files.
    pub fn parent_dir(&self) -> &str {
        crate::paths::parent_dir(&self.path)
    }
}

/// Aggregate counts from one scan pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_documents: usize,
    pub orphaned_documents: usize,
    pub broken_links: usize,
    /// Distinct directories containing at least one document (root is `"."`)
    pub directories: usize,
    /// Documents skipped because they could not be read
    pub parse_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind_classification() {
        assert_eq!(LinkKind::classify("guide.md#setup"), LinkKind::AnchorOnly);
        assert_eq!(LinkKind::classify("../other.md"), LinkKind::Relative);
        assert_eq!(LinkKind::classify("/docs/api.md"), LinkKind::AbsoluteRoot);
        assert_eq!(LinkKind::classify("sibling.md"), LinkKind::Relative);
    }

    #[test]
    fn test_target_path_strips_anchor() {
        let link = LinkRef {
            text: "setup".to_string(),
            target: "guide.md#setup".to_string(),
            raw: "guide.md#setup".to_string(),
            kind: LinkKind::AnchorOnly,
        };
        assert_eq!(link.target_path(), "guide.md");
    }

    #[test]
    fn test_anchor_only_self_reference_is_empty() {
        let link = LinkRef {
            text: "below".to_string(),
            target: "#section".to_string(),
            raw: "#section".to_string(),
            kind: LinkKind::AnchorOnly,
        };
        assert_eq!(link.target_path(), "");
    }
}
