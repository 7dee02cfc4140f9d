//! In-memory document store populated by a recursive directory walk.
//!
//! The store maps root-relative paths to parsed [`Document`] records. It is
//! built once per scan invocation and never persisted; a repair pass mutates
//! the underlying files in place, after which a subsequent scan sees the
//! updated state.

use chrono::{DateTime, Utc};
use docgraph_core::{Document, Error, Result, ScanOptions};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

use crate::write::write_atomic;

/// Path-keyed mapping of every parsed document under the scan root.
///
/// Iteration order is the sorted key order (BTreeMap), which keeps every
/// downstream judgment deterministic.
pub struct DocumentStore {
    root: PathBuf,
    documents: BTreeMap<String, Document>,
    parse_failures: usize,
}

impl DocumentStore {
    /// Walk the scan root and parse every tracked document.
    ///
    /// An unreadable root is fatal. An unreadable individual file is
    /// skipped with a counter increment and the scan continues.
    pub fn scan(options: &ScanOptions) -> Result<Self> {
        options.validate()?;

        let root = options
            .root
            .canonicalize()
            .map_err(|e| Error::config_error(format!("cannot access root: {}", e)))?;

        log::info!("scanning {}", root.display());

        let mut documents = BTreeMap::new();
        let mut parse_failures = 0usize;

        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry, options));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("walk error: {}", e);
                    parse_failures += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() || !has_extension(entry.path(), &options.extension) {
                continue;
            }

            let rel_path = relative_key(entry.path(), &root);

            match std::fs::read_to_string(entry.path()) {
                Ok(content) => {
                    let modified = modified_time(&entry);
                    let doc = docgraph_parser::parse_document(&rel_path, &content, modified);
                    log::debug!("parsed {}: {} links", rel_path, doc.links.len());
                    documents.insert(rel_path, doc);
                }
                Err(e) => {
                    log::warn!("skipping unreadable {}: {}", rel_path, e);
                    parse_failures += 1;
                }
            }
        }

        log::info!(
            "scan complete: {} documents, {} read failures",
            documents.len(),
            parse_failures
        );

        Ok(Self {
            root,
            documents,
            parse_failures,
        })
    }

    /// Absolute path of the scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Whether a root-relative key names a known document.
    pub fn contains(&self, rel_path: &str) -> bool {
        self.documents.contains_key(rel_path)
    }

    pub fn get(&self, rel_path: &str) -> Option<&Document> {
        self.documents.get(rel_path)
    }

    /// Documents in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Document)> {
        self.documents.iter()
    }

    /// Sorted document keys.
    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.documents.keys()
    }

    /// Count of files skipped because they could not be read.
    pub fn parse_failures(&self) -> usize {
        self.parse_failures
    }

    /// Count of distinct directories holding at least one document
    /// (root-level documents count under `"."`).
    pub fn directories(&self) -> usize {
        self.documents
            .values()
            .map(|doc| doc.parent_dir())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Sum of word counts across all documents.
    pub fn total_words(&self) -> usize {
        self.documents.values().map(|doc| doc.word_count).sum()
    }

    /// Apply a batch of link-target substitutions to one document file.
    ///
    /// Each `(old, new)` pair rewrites the target position `](old)` to
    /// `](new)`, leaving link text and surrounding content untouched. All
    /// replacements for a file land in a single atomic write, and the file
    /// is only written when content actually changed. Returns whether a
    /// write happened.
    pub fn apply_replacements(&self, rel_path: &str, replacements: &[(String, String)]) -> Result<bool> {
        let full_path = self.root.join(rel_path);
        let original = std::fs::read_to_string(&full_path)
            .map_err(|e| Error::rewrite_error(&full_path, e.to_string()))?;

        let mut content = original.clone();
        for (old, new) in replacements {
            let pattern = format!("]({})", old);
            let replacement = format!("]({})", new);
            content = content.replace(&pattern, &replacement);
        }

        if content == original {
            return Ok(false);
        }

        write_atomic(&full_path, &content)
            .map_err(|e| Error::rewrite_error(&full_path, e.to_string()))?;
        Ok(true)
    }

    /// Write a new or replacement document under the root atomically.
    pub fn write_document(&self, rel_path: &str, content: &str) -> Result<()> {
        let full_path = self.root.join(rel_path);
        write_atomic(&full_path, content)
    }

    /// Read a document's current on-disk content.
    pub fn read_document(&self, rel_path: &str) -> Result<String> {
        let full_path = self.root.join(rel_path);
        std::fs::read_to_string(&full_path).map_err(Error::io)
    }

    /// Build a store directly from already-parsed documents, bypassing the
    /// filesystem walk. Useful when documents come from another source and
    /// for exercising the analyzers in isolation.
    pub fn from_documents(root: impl Into<PathBuf>, docs: Vec<Document>) -> Self {
        Self {
            root: root.into(),
            documents: docs.into_iter().map(|d| (d.path.clone(), d)).collect(),
            parse_failures: 0,
        }
    }
}

/// Prune housekeeping directories from the walk. The root itself (depth 0)
/// is never pruned.
fn is_skipped(entry: &DirEntry, options: &ScanOptions) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| options.skip_dirs.contains(name))
            .unwrap_or(false)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Root-relative, forward-slash normalized key for a file under the root.
fn relative_key(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn modified_time(entry: &DirEntry) -> DateTime<Utc> {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|| DateTime::<Utc>::from(SystemTime::UNIX_EPOCH))
}
