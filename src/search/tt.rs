use std::collections::HashMap;

use crate::search::SearchResult;

/// Positive memo table for one move decision.
///
/// No depth, bound, or replacement policy: the latest `put` for a key wins and
/// every hit is trusted as-is. Owned by a single searcher; start a new one
/// (or `clear`) per decision.
#[derive(Debug, Default)]
pub struct Tt {
    entries: HashMap<u64, SearchResult>,
    hits: u64,
}

impl Tt {
    pub fn new() -> Self { Self::default() }

    pub fn get(&mut self, key: u64) -> Option<SearchResult> {
        let e = self.entries.get(&key).copied();
        if e.is_some() { self.hits += 1; }
        e
    }

    pub fn put(&mut self, key: u64, e: SearchResult) {
        self.entries.insert(key, e);
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn hits(&self) -> u64 { self.hits }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }
}
