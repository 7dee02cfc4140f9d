//! Matching strategies for relocating broken link targets.
//!
//! Modeled as an ordered list of independent matchers, each returning an
//! optional candidate with a confidence value. The engine applies them in
//! priority order and stops at the first acceptance.

use docgraph_core::paths;
use docgraph_graph::BrokenLink;
use docgraph_store::DocumentStore;
use similar::TextDiff;

/// Which strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    ExactFilename,
    Similarity,
    ArchiveFallback,
}

impl MatchStrategy {
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExactFilename => "exact filename",
            Self::Similarity => "title/filename similarity",
            Self::ArchiveFallback => "archive fallback",
        }
    }
}

/// A proposed replacement target.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    /// Store key of the proposed replacement document
    pub path: String,
    /// Similarity confidence in 0.0..=1.0 (1.0 for exact strategies)
    pub confidence: f32,
    pub strategy: MatchStrategy,
}

/// One strategy in the cascade.
pub trait Matcher {
    fn find(&self, broken: &BrokenLink, store: &DocumentStore) -> Option<MatchCandidate>;
}

fn stripped_target(broken: &BrokenLink) -> Option<&str> {
    let target = broken.target.split('#').next().unwrap_or("");
    if target.is_empty() { None } else { Some(target) }
}

/// Strategy 1: the bare filename of the broken target matches a store
/// key's filename, case-sensitive.
///
/// Ties are broken deterministically: fewest path components, then
/// shortest path string, then lexicographic.
pub struct ExactFilenameMatcher;

impl Matcher for ExactFilenameMatcher {
    fn find(&self, broken: &BrokenLink, store: &DocumentStore) -> Option<MatchCandidate> {
        let target = stripped_target(broken)?;
        let filename = paths::file_name(target);

        store
            .paths()
            .filter(|path| paths::file_name(path) == filename)
            .min_by_key(|path| (path.matches('/').count(), path.len(), path.as_str()))
            .map(|path| MatchCandidate {
                path: path.clone(),
                confidence: 1.0,
                strategy: MatchStrategy::ExactFilename,
            })
    }
}

/// Strategy 2: fuzzy match on the link's visible text against candidate
/// titles, and the broken filename against candidate filenames.
///
/// Combined score is `max(title, filename * discount)`: titles are the more
/// reliable signal of identity, so filename similarity is discounted. The
/// best candidate is accepted only above the threshold (exclusive).
pub struct SimilarityMatcher {
    pub threshold: f32,
    pub filename_discount: f32,
}

impl Matcher for SimilarityMatcher {
    fn find(&self, broken: &BrokenLink, store: &DocumentStore) -> Option<MatchCandidate> {
        let target = stripped_target(broken)?;
        let filename = paths::file_name(target).to_lowercase();
        let link_text = broken.text.to_lowercase();

        let mut best: Option<MatchCandidate> = None;

        for (path, doc) in store.iter() {
            let title_score = char_ratio(&link_text, &doc.title.to_lowercase());
            let file_score = char_ratio(&filename, &paths::file_name(path).to_lowercase());
            let score = title_score.max(file_score * self.filename_discount);

            if score > self.threshold
                && best.as_ref().map(|b| score > b.confidence).unwrap_or(true)
            {
                best = Some(MatchCandidate {
                    path: path.clone(),
                    confidence: score,
                    strategy: MatchStrategy::Similarity,
                });
            }
        }

        best
    }
}

/// Strategy 3: probe whether the document was moved under the archive
/// prefix. Skipped when the broken target already lives there.
pub struct ArchiveFallbackMatcher {
    pub prefix: String,
}

impl Matcher for ArchiveFallbackMatcher {
    fn find(&self, broken: &BrokenLink, store: &DocumentStore) -> Option<MatchCandidate> {
        let target = stripped_target(broken)?;

        if target.starts_with(&format!("{}/", self.prefix)) {
            return None;
        }

        let archived = format!("{}/{}", self.prefix, target);
        if store.contains(&archived) {
            Some(MatchCandidate {
                path: archived,
                confidence: 1.0,
                strategy: MatchStrategy::ArchiveFallback,
            })
        } else {
            None
        }
    }
}

/// Difflib-style normalized similarity ratio over characters (2M/T).
fn char_ratio(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}
