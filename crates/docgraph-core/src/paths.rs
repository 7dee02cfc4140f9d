//! Path helpers for root-relative document keys.
//!
//! Document keys are plain strings with forward slashes, never `\\` and never
//! a leading `./`. All math here is lexical: no filesystem access, which keeps
//! the graph and repair layers deterministic and testable.

/// The bare filename component of a root-relative path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// The directory component of a root-relative path, `"."` for root files.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Resolve a raw link target against the directory of the containing
/// document, producing a root-relative key.
///
/// Returns `None` when normalization would escape the scan root; the caller
/// keeps the raw target unchanged in that case (an unclassifiable link that
/// will usually surface as broken, which is acceptable).
pub fn resolve_relative(source_dir: &str, raw_target: &str) -> Option<String> {
    let mut stack: Vec<&str> = Vec::new();

    let components = source_dir
        .split('/')
        .chain(raw_target.split('/'))
        .filter(|c| !c.is_empty() && *c != ".");

    for component in components {
        if component == ".." {
            // Popping past the root escapes the scan tree
            stack.pop()?;
        } else {
            stack.push(component);
        }
    }

    Some(stack.join("/"))
}

/// Compute `to` as a path relative to `from_dir` (both root-relative),
/// the equivalent of standard relative-path math with forward slashes.
pub fn relative_from(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = from_dir
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();
    let to_parts: Vec<&str> = to.split('/').filter(|c| !c.is_empty() && *c != ".").collect();

    let common = from
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..from.len() {
        parts.push("..");
    }
    parts.extend(&to_parts[common..]);

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
