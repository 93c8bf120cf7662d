#![forbid(unsafe_code)]

use std::collections::HashSet;

use regex::Regex;

use crate::error::{ImagesError, ImagesResult};
use crate::row::ImageRow;

/// Compile the optional pod-name pattern.
pub fn compile_pattern(pattern: &str) -> ImagesResult<Regex> {
    Regex::new(pattern).map_err(|source| ImagesError::InvalidPattern { pattern: pattern.to_string(), source })
}

/// Keep rows whose pod name contains a match. `None` keeps everything.
pub fn filter_by_pod(rows: Vec<ImageRow>, pattern: Option<&Regex>) -> Vec<ImageRow> {
    match pattern {
        None => rows,
        Some(re) => rows.into_iter().filter(|r| re.is_match(&r.pod)).collect(),
    }
}

/// Drop rows repeating an earlier `(namespace, container, image, pull policy)`.
/// Pod name is not part of the key.
pub fn unique_images(rows: &[ImageRow]) -> Vec<ImageRow> {
    let mut seen: HashSet<(&str, &str, &str, &str)> = HashSet::new();
    let mut out = Vec::new();
    for r in rows {
        let key = (r.namespace.as_str(), r.container.as_str(), r.image.as_str(), r.pull_policy.as_str());
        if seen.insert(key) {
            out.push(r.clone());
        }
    }
    out
}
