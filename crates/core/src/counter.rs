#![forbid(unsafe_code)]

use std::collections::HashSet;

/// Counts distinct strings.
#[derive(Debug, Default)]
pub struct UniqueCounter {
    seen: HashSet<String>,
}

impl UniqueCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        if !self.seen.contains(item) {
            self.seen.insert(item.to_string());
        }
    }

    pub fn count(&self) -> usize {
        self.seen.len()
    }
}
