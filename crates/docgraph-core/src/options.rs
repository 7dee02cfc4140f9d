//! Scan configuration.
//!
//! Follows a builder pattern with validation: construct with
//! [`ScanOptions::builder`], override what you need, then `build()` checks
//! the result. An invalid root is a setup error and aborts before any scan
//! work begins.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Configuration for a single scan session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Tracked file extension (without the dot)
    pub extension: String,
    /// Directory names skipped during the walk (version-control metadata,
    /// dependency caches, generated folders)
    pub skip_dirs: HashSet<String>,
    /// Filenames exempted from orphan classification by convention
    pub root_names: HashSet<String>,
    /// The conventional root index filename
    pub index_name: String,
    /// Directory prefix probed by the archive repair fallback
    pub archive_prefix: String,
    /// Minimum combined similarity for a fuzzy repair match (exclusive)
    pub similarity_threshold: f32,
    /// Discount applied to filename similarity relative to title similarity
    pub filename_discount: f32,
    /// Health score below which `--fix-critical` triggers repairs
    pub critical_threshold: u8,
}

impl ScanOptions {
    /// Create a builder rooted at the given directory.
    pub fn builder(root: impl Into<PathBuf>) -> ScanOptionsBuilder {
        ScanOptionsBuilder::new(root)
    }

    /// Default options for a root directory. Call [`ScanOptions::validate`]
    /// before scanning.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let skip_dirs = ["node_modules", "__pycache__", "target", ".obsidian"]
            .iter()
            .map(|s| s.to_string())
            .chain(hidden_defaults())
            .collect();

        let root_names = ["index.md", "README.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        Self {
            root: root.into(),
            extension: "md".to_string(),
            skip_dirs,
            root_names,
            index_name: "index.md".to_string(),
            archive_prefix: "archive".to_string(),
            similarity_threshold: 0.7,
            filename_discount: 0.8,
            critical_threshold: 70,
        }
    }

    /// Validate the configuration. A nonexistent or non-directory root is
    /// fatal; everything else has usable defaults.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Error::config_error(format!(
                "root path does not exist: {}",
                self.root.display()
            )));
        }
        if !self.root.is_dir() {
            return Err(Error::config_error(format!(
                "root path is not a directory: {}",
                self.root.display()
            )));
        }
        if self.extension.is_empty() {
            return Err(Error::config_error("tracked extension cannot be empty"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::config_error(
                "similarity threshold must be within 0.0..=1.0",
            ));
        }
        Ok(())
    }

    /// Whether a filename is a conventional root entry point.
    pub fn is_root_name(&self, file_name: &str) -> bool {
        self.root_names.contains(file_name)
    }
}

fn hidden_defaults() -> impl Iterator<Item = String> {
    [".git", ".apm", ".claude"].iter().map(|s| s.to_string())
}

/// Builder for [`ScanOptions`].
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}

impl ScanOptionsBuilder {
    fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions::new(root),
        }
    }

    /// Replace the tracked extension.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.options.extension = ext.into();
        self
    }

    /// Add a directory name to skip.
    pub fn skip_dir(mut self, name: impl Into<String>) -> Self {
        self.options.skip_dirs.insert(name.into());
        self
    }

    /// Replace the conventional root-entry filenames.
    pub fn root_names(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.root_names = names.into_iter().collect();
        self
    }

    /// Replace the archive prefix used by the repair fallback.
    pub fn archive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.archive_prefix = prefix.into();
        self
    }

    /// Replace the similarity acceptance threshold.
    pub fn similarity_threshold(mut self, threshold: f32) -> Self {
        self.options.similarity_threshold = threshold;
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<ScanOptions> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build without validation (for unit tests that never touch the disk).
    pub fn build_unchecked(self) -> ScanOptions {
        self.options
    }
}
