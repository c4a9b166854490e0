//! The blog engine.
//!
//! [`Blog`] owns the session state the original design kept in ambient
//! globals: the manifest, the parsed-post cache, and the fetcher. It is
//! constructed once per session and handed by reference to whatever
//! drives it (the CLI here, a routing host elsewhere). Everything it
//! returns is data — markup and [`crate::view::ViewState`] — so the
//! pipeline can be exercised end to end without a display layer.
//!
//! Error policy: manifest failure at construction is fatal to everything
//! index-dependent; a post lookup miss or fetch failure is terminal for
//! that render only and surfaces as a [`BlogError`] the host turns into
//! a user-visible message. The single recoverable case is a malformed
//! frontmatter block, which degrades to "no metadata" with a warning the
//! host can drain.

use crate::cache::{CacheStats, PostCache};
use crate::config::BlogConfig;
use crate::fetch::Fetcher;
use crate::frontmatter;
use crate::index::build_index;
use crate::manifest::{Manifest, ManifestError};
use crate::post::{self, PostView};
use crate::types::{ParsedPost, PostMeta};
use maud::Markup;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    /// Manifest fetch or parse failed at startup.
    #[error("could not load blog posts: {0}")]
    ManifestLoad(#[from] ManifestError),
    /// The requested (year, slug) is not in the manifest.
    #[error("post not found: {year}/{slug}")]
    PostNotFound { year: u16, slug: String },
    /// The post body could not be fetched.
    #[error("failed to load post {path}: {source}")]
    PostFetch {
        path: String,
        source: std::io::Error,
    },
}

/// Session-scoped engine instance: manifest, cache, fetcher.
pub struct Blog {
    manifest: Manifest,
    cache: PostCache,
    fetcher: Box<dyn Fetcher>,
    cache_enabled: bool,
    warnings: Vec<String>,
}

impl std::fmt::Debug for Blog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blog")
            .field("manifest", &self.manifest)
            .field("cache", &self.cache)
            .field("cache_enabled", &self.cache_enabled)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

impl Blog {
    /// Construct the engine: fetch and validate the manifest exactly
    /// once. Runs before any routing.
    pub fn open(fetcher: Box<dyn Fetcher>, config: &BlogConfig) -> Result<Self, BlogError> {
        let manifest = Manifest::load(fetcher.as_ref(), &config.manifest_file)?;
        Ok(Self {
            manifest,
            cache: PostCache::new(),
            fetcher,
            cache_enabled: config.cache_enabled,
            warnings: Vec::new(),
        })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    /// Degradation warnings collected since the last drain (malformed
    /// frontmatter blocks). Library code never prints; the host decides
    /// where these go.
    pub fn drain_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Render the index view from the manifest.
    pub fn render_index(&self) -> Markup {
        build_index(&self.manifest.posts)
    }

    /// Render a single post: lookup, fetch-through-cache, footnote and
    /// markdown processing, adjacency, markup.
    pub fn render_post(&mut self, year: u16, slug: &str) -> Result<PostView, BlogError> {
        let meta = self
            .manifest
            .find(year, slug)
            .cloned()
            .ok_or_else(|| BlogError::PostNotFound {
                year,
                slug: slug.to_string(),
            })?;
        let parsed = self.load_post(&meta)?;
        let (prev, next) = self.manifest.adjacent(&meta);
        Ok(post::render(&parsed, &meta, prev, next))
    }

    /// Fetch and parse a post body, going through the cache. At most one
    /// fetch per file per session when caching is enabled.
    fn load_post(&mut self, meta: &PostMeta) -> Result<ParsedPost, BlogError> {
        if self.cache_enabled
            && let Some(cached) = self.cache.get(&meta.file)
        {
            return Ok(cached);
        }

        let raw = self
            .fetcher
            .fetch(&meta.file)
            .map_err(|source| BlogError::PostFetch {
                path: meta.file.clone(),
                source,
            })?;

        let parsed = frontmatter::parse(&raw);
        if let Some(warning) = parsed.warning {
            self.warnings.push(format!("{}: {warning}", meta.file));
        }
        let fm = parsed.meta.unwrap_or_default();

        // Frontmatter overrides manifest values when present.
        let post = ParsedPost {
            title: fm.title.unwrap_or_else(|| meta.title.clone()),
            date: fm.date.unwrap_or(meta.date),
            category: fm.category.unwrap_or(meta.category),
            content: parsed.body.to_string(),
        };

        if self.cache_enabled {
            self.cache.insert(meta.file.clone(), post.clone());
        }
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_manifest;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;

    /// In-memory fetcher that counts fetches per path. Cloning shares the
    /// same file set and counters, so a test can keep a handle while the
    /// engine owns its copy.
    #[derive(Clone)]
    struct MemFetcher {
        files: Rc<HashMap<String, String>>,
        counts: Rc<RefCell<HashMap<String, u32>>>,
    }

    impl MemFetcher {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: Rc::new(
                    files
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                counts: Rc::new(RefCell::new(HashMap::new())),
            }
        }

        fn with_manifest(files: &[(&str, &str)]) -> Self {
            let manifest = sample_manifest();
            let json = serde_json::to_string(&manifest).unwrap();
            let mut all = vec![("posts.json".to_string(), json)];
            all.extend(files.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            Self {
                files: Rc::new(all.into_iter().collect()),
                counts: Rc::new(RefCell::new(HashMap::new())),
            }
        }

        fn count(&self, path: &str) -> u32 {
            *self.counts.borrow().get(path).unwrap_or(&0)
        }

        fn paths_fetched(&self) -> usize {
            self.counts.borrow().len()
        }
    }

    impl Fetcher for MemFetcher {
        fn fetch(&self, path: &str) -> io::Result<String> {
            *self.counts.borrow_mut().entry(path.to_string()).or_insert(0) += 1;
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
        }
    }

    fn open_blog(files: &[(&str, &str)]) -> (Blog, MemFetcher) {
        let fetcher = MemFetcher::with_manifest(files);
        let handle = fetcher.clone();
        let blog = Blog::open(Box::new(fetcher), &BlogConfig::default()).unwrap();
        (blog, handle)
    }

    const SUMMER_FILE: &str = "./posts/2024/Summer Notes.md";

    #[test]
    fn open_fails_without_manifest() {
        let fetcher = Box::new(MemFetcher::new(&[]));
        let err = Blog::open(fetcher, &BlogConfig::default()).unwrap_err();
        assert!(matches!(err, BlogError::ManifestLoad(_)));
    }

    #[test]
    fn render_post_contains_title_and_date() {
        let (mut blog, _) = open_blog(&[(SUMMER_FILE, "# Hello\n\nBody.")]);
        let view = blog.render_post(2024, "summer-notes").unwrap();
        let html = view.article.into_string();
        assert!(html.contains("Summer Notes"));
        assert!(html.contains("01-06-24"));
    }

    #[test]
    fn second_render_is_a_cache_hit() {
        let (mut blog, fetcher) = open_blog(&[(SUMMER_FILE, "Body.")]);
        blog.render_post(2024, "summer-notes").unwrap();
        blog.render_post(2024, "summer-notes").unwrap();
        assert_eq!(fetcher.count(SUMMER_FILE), 1);
        assert_eq!(blog.cache_stats().hits, 1);
    }

    #[test]
    fn cache_disabled_refetches() {
        let fetcher = MemFetcher::with_manifest(&[(SUMMER_FILE, "Body.")]);
        let handle = fetcher.clone();
        let config = BlogConfig {
            cache_enabled: false,
            ..BlogConfig::default()
        };
        let mut blog = Blog::open(Box::new(fetcher), &config).unwrap();
        blog.render_post(2024, "summer-notes").unwrap();
        blog.render_post(2024, "summer-notes").unwrap();
        assert_eq!(handle.count(SUMMER_FILE), 2);
    }

    #[test]
    fn unknown_post_is_not_found_and_not_fetched() {
        let (mut blog, fetcher) = open_blog(&[]);
        let err = blog.render_post(2024, "missing").unwrap_err();
        assert!(matches!(
            err,
            BlogError::PostNotFound { year: 2024, ref slug } if slug == "missing"
        ));
        // Only the manifest was ever fetched.
        assert_eq!(fetcher.paths_fetched(), 1);
    }

    #[test]
    fn fetch_failure_surfaces() {
        let (mut blog, _) = open_blog(&[]); // manifest present, post file absent
        let err = blog.render_post(2024, "summer-notes").unwrap_err();
        assert!(matches!(err, BlogError::PostFetch { .. }));
    }

    #[test]
    fn frontmatter_overrides_manifest() {
        let body = "---\ntitle: Override\ndate: 2024-07-07\ncategory: web_design\n---\ncontent";
        let (mut blog, _) = open_blog(&[(SUMMER_FILE, body)]);
        let html = blog
            .render_post(2024, "summer-notes")
            .unwrap()
            .article
            .into_string();
        assert!(html.contains("<h1>Override</h1>"));
        assert!(html.contains("07-07-24"));
        assert!(html.contains("Web Design"));
        // Breadcrumbs keep manifest identity for routing.
        assert!(blog.drain_warnings().is_empty());
    }

    #[test]
    fn malformed_frontmatter_degrades_with_warning() {
        let body = "---\ntitle: [broken\n---\nStill renders.";
        let (mut blog, _) = open_blog(&[(SUMMER_FILE, body)]);
        let html = blog
            .render_post(2024, "summer-notes")
            .unwrap()
            .article
            .into_string();
        // Manifest title used, full original text rendered.
        assert!(html.contains("Summer Notes"));
        assert!(html.contains("Still renders."));
        let warnings = blog.drain_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(SUMMER_FILE));
        // Draining empties the buffer.
        assert!(blog.drain_warnings().is_empty());
    }

    #[test]
    fn render_index_lists_all_posts() {
        let (blog, _) = open_blog(&[]);
        let html = blog.render_index().into_string();
        assert!(html.contains("summer-notes"));
        assert!(html.contains("new-year"));
        assert!(html.contains("retro"));
    }
}
