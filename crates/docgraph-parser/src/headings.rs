//! Heading parser: # H1, ## H2, etc.

use docgraph_core::Heading;
use regex::Regex;
use std::sync::LazyLock;

/// Matches # Heading, ## Heading, up to ###### Heading
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Parse all headings from content, in document order. Duplicates allowed.
pub fn parse_headings(content: &str) -> Vec<Heading> {
    content
        .lines()
        .filter_map(|line| {
            HEADING_PATTERN.captures(line).map(|caps| Heading {
                level: caps.get(1).unwrap().as_str().len() as u8,
                text: caps.get(2).unwrap().as_str().trim().to_string(),
            })
        })
        .collect()
}

/// Extract the document title: the first single-level heading. Absence is
/// not an error; the caller falls back to the "Untitled" sentinel.
pub fn parse_title(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        HEADING_PATTERN.captures(line).and_then(|caps| {
            if caps.get(1).unwrap().as_str().len() == 1 {
                Some(caps.get(2).unwrap().as_str().trim().to_string())
            } else {
                None
            }
        })
    })
}
