//! Inline link parser: `[text](target)`.
//!
//! External http/https links are dropped before they enter the model.
//! Everything else is resolved against the containing document's directory
//! and normalized to a scan-root-relative key; a target that escapes the
//! root is kept unchanged and will usually surface later as broken.

use docgraph_core::{LinkKind, LinkRef, paths};
use regex::Regex;
use std::sync::LazyLock;

/// Matches inline links: [text](target)
static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Fast pre-filter: skip regex if no link pattern exists.
#[inline]
fn has_inline_link(content: &str) -> bool {
    content.contains("](")
}

fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Parse all internal links from content, in document order.
///
/// `source_dir` is the directory of the containing document relative to the
/// scan root (`"."` for root-level documents).
pub fn parse_links(content: &str, source_dir: &str) -> Vec<LinkRef> {
    if !has_inline_link(content) {
        return Vec::new();
    }

    INLINE_LINK
        .captures_iter(content)
        .filter_map(|caps| {
            let full_match = caps.get(0).unwrap();
            let start = full_match.start();

            // Skip images: no look-behind in the regex crate, filter manually
            if start > 0 && content.as_bytes().get(start - 1) == Some(&b'!') {
                return None;
            }

            let text = caps.get(1).unwrap().as_str();
            let raw_target = caps.get(2).unwrap().as_str();

            if is_external(raw_target) {
                return None;
            }

            let kind = LinkKind::classify(raw_target);
            let target = resolve_target(source_dir, raw_target);

            Some(LinkRef {
                text: text.to_string(),
                target,
                raw: raw_target.to_string(),
                kind,
            })
        })
        .collect()
}

/// Resolve a raw target to a root-relative key. Anchor fragments stay
/// attached to the final component; anchor-only references and absolute-root
/// paths are kept as written.
fn resolve_target(source_dir: &str, raw_target: &str) -> String {
    if raw_target.starts_with('#') || raw_target.starts_with('/') {
        return raw_target.to_string();
    }

    paths::resolve_relative(source_dir, raw_target).unwrap_or_else(|| raw_target.to_string())
}
