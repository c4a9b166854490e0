//! The post manifest: the authoritative list of post metadata.
//!
//! The manifest (`posts.json` by default) is what lets the engine build
//! the index and resolve routes without fetching every post body. It is
//! loaded exactly once when the engine starts; inside the engine it is
//! never mutated. The authoring tool is the only writer.
//!
//! Wire format:
//!
//! ```json
//! { "posts": [ { "slug": "...", "title": "...", "date": "YYYY-MM-DD",
//!               "category": "web_design", "file": "./posts/...", "year": 2024 } ] }
//! ```
//!
//! Loading validates the one structural invariant the rest of the engine
//! relies on: the (year, slug) pair is unique across the manifest.

use crate::fetch::Fetcher;
use crate::types::PostMeta;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate post {year}/{slug} in manifest")]
    Duplicate { year: u16, slug: String },
}

/// Ordered collection of post metadata. File order is preserved and used
/// as the tie-breaker wherever posts share a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub posts: Vec<PostMeta>,
}

impl Manifest {
    /// Parse and validate manifest JSON.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Fetch, parse, and validate the manifest through a [`Fetcher`].
    pub fn load(fetcher: &dyn Fetcher, path: &str) -> Result<Self, ManifestError> {
        let json = fetcher.fetch(path)?;
        Self::from_json(&json)
    }

    /// Read the manifest from a file on disk (authoring/check path).
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write pretty-printed JSON with a trailing newline.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check the (year, slug) uniqueness invariant.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen: HashSet<(u16, &str)> = HashSet::new();
        for post in &self.posts {
            if !seen.insert((post.year, post.slug.as_str())) {
                return Err(ManifestError::Duplicate {
                    year: post.year,
                    slug: post.slug.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a post by its (year, slug) route key.
    pub fn find(&self, year: u16, slug: &str) -> Option<&PostMeta> {
        self.posts
            .iter()
            .find(|p| p.year == year && p.slug == slug)
    }

    /// All posts, newest first. The sort is stable: posts sharing a date
    /// keep their manifest order.
    pub fn sorted_by_date_desc(&self) -> Vec<&PostMeta> {
        let mut sorted: Vec<&PostMeta> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Chronologically adjacent posts for navigation. "Previous" is the
    /// entry before the current one in the newest-first ordering (the
    /// newer post) and "next" is the entry after it (the older post) —
    /// adjacency tracks the sorted-list position, not insertion order.
    pub fn adjacent(&self, current: &PostMeta) -> (Option<&PostMeta>, Option<&PostMeta>) {
        let sorted = self.sorted_by_date_desc();
        let Some(idx) = sorted
            .iter()
            .position(|p| p.year == current.year && p.slug == current.slug)
        else {
            return (None, None);
        };
        let prev = if idx > 0 { Some(sorted[idx - 1]) } else { None };
        let next = sorted.get(idx + 1).copied();
        (prev, next)
    }
}
