//! In-memory parsed-post cache.
//!
//! Maps a post's file path to its [`ParsedPost`] so each source file is
//! fetched at most once per engine lifetime. Entries are never
//! invalidated: post files are immutable for the duration of a session,
//! so there is no TTL and no versioning.
//!
//! The cache is owned by the engine and only reachable through `&mut`
//! access, so the check-then-populate sequence cannot interleave with
//! another fetch for the same key. A port that introduces concurrent
//! dispatch must add per-key in-flight deduplication to keep the
//! at-most-once-fetch property.

use crate::types::ParsedPost;
use std::collections::HashMap;
use std::fmt;

/// Session cache keyed by post file path.
#[derive(Debug, Default)]
pub struct PostCache {
    entries: HashMap<String, ParsedPost>,
    stats: CacheStats,
}

impl PostCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parsed post, counting the hit or miss.
    pub fn get(&mut self, file: &str) -> Option<ParsedPost> {
        match self.entries.get(file) {
            Some(post) => {
                self.stats.hits += 1;
                Some(post.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store the parsed post for a file path.
    pub fn insert(&mut self, file: String, post: ParsedPost) {
        self.entries.insert(file, post);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

/// Hit/miss counters for a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
}

impl CacheStats {
    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits > 0 {
            write!(
                f,
                "{} cached, {} fetched ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} fetched", self.misses)
        }
    }
}
