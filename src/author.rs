//! Post authoring: the logic behind `inkpost new`.
//!
//! Validates the prompted fields, derives the slug and file locations,
//! produces the frontmatter stub, and updates the manifest. Everything
//! here is non-interactive; the prompt loop lives in the binary and
//! feeds validated strings in.
//!
//! Manifest update rules:
//! - de-duplicate by (year, slug) — replacing an existing entry requires
//!   explicit confirmation from the caller
//! - after insertion, the manifest is re-sorted by date descending
//!   before persisting

use crate::manifest::{Manifest, ManifestError};
use crate::slug::slugify;
use crate::types::{Category, PostMeta};
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthorError {
    #[error("title is required")]
    EmptyTitle,
    #[error("invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("{0}")]
    InvalidCategory(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// A validated new post, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
}

impl NewPost {
    /// Validate raw prompt input.
    pub fn validate(title: &str, date: &str, category: &str) -> Result<Self, AuthorError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AuthorError::EmptyTitle);
        }
        let date = parse_date(date)?;
        let category = category
            .parse::<Category>()
            .map_err(AuthorError::InvalidCategory)?;
        Ok(Self {
            title: title.to_string(),
            date,
            category,
        })
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn year(&self) -> u16 {
        self.date.year() as u16
    }

    /// Manifest-side file path: `./posts/{year}/{title}.md`.
    pub fn relative_file(&self) -> String {
        format!("./posts/{}/{}.md", self.year(), self.title)
    }

    /// Filesystem path of the source file under the blog directory.
    pub fn file_path(&self, blog_dir: &Path) -> PathBuf {
        blog_dir
            .join("posts")
            .join(self.year().to_string())
            .join(format!("{}.md", self.title))
    }

    /// Frontmatter stub plus a starter body.
    pub fn stub(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\ndate: {}\ncategory: {}\n---\n\n# {}\n\nWrite your content here...\n",
            self.title,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.title,
        )
    }

    /// The manifest entry for this post.
    pub fn meta(&self) -> PostMeta {
        PostMeta {
            slug: self.slug(),
            title: self.title.clone(),
            date: self.date,
            category: self.category,
            file: self.relative_file(),
            year: self.year(),
        }
    }

    /// Write the stub source file, creating `posts/{year}/` as needed.
    pub fn write_file(&self, blog_dir: &Path) -> Result<PathBuf, AuthorError> {
        let path = self.file_path(blog_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.stub())?;
        Ok(path)
    }
}

/// Strict `YYYY-MM-DD`: shape first, then calendar validity.
pub fn parse_date(input: &str) -> Result<NaiveDate, AuthorError> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(AuthorError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AuthorError::InvalidDate(input.to_string()))
}

/// Does the manifest already hold an entry for this (year, slug)?
pub fn entry_exists(manifest: &Manifest, year: u16, slug: &str) -> bool {
    manifest.find(year, slug).is_some()
}

/// Insert (or replace) a post entry and re-sort by date descending.
/// The caller is responsible for confirming replacement beforehand.
pub fn upsert(manifest: &mut Manifest, meta: PostMeta) {
    manifest
        .posts
        .retain(|p| !(p.year == meta.year && p.slug == meta.slug));
    manifest.posts.push(meta);
    manifest.posts.sort_by(|a, b| b.date.cmp(&a.date));
}
