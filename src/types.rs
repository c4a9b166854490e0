//! Shared types used across the engine, the authoring tool, and the CLI.
//!
//! `PostMeta` is the manifest-side description of a post; `ParsedPost` is
//! what a post looks like after its source file has been fetched and its
//! frontmatter merged in. Frontmatter values win over manifest values —
//! the document is closer to the source of truth for that post.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Post category. The wire format (manifest JSON, frontmatter YAML) uses
/// the snake_case names `web_design` and `general`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WebDesign,
    General,
}

impl Category {
    /// All categories, in prompt/display order.
    pub const ALL: [Category; 2] = [Category::WebDesign, Category::General];

    /// Wire name as it appears in the manifest and in `data-category`
    /// attributes: `web_design` or `general`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::WebDesign => "web_design",
            Category::General => "general",
        }
    }

    /// Human-readable label: "Web Design" or "General".
    pub fn label(self) -> &'static str {
        match self {
            Category::WebDesign => "Web Design",
            Category::General => "General",
        }
    }

    /// CSS class carried by index entries for styling per category.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::WebDesign => "sub-web",
            Category::General => "sub-gen",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web_design" => Ok(Category::WebDesign),
            "general" => Ok(Category::General),
            other => Err(format!(
                "invalid category '{other}': must be one of web_design, general"
            )),
        }
    }
}

/// One manifest entry. Created by the authoring tool, loaded once per
/// session, immutable inside the engine. The (year, slug) pair is unique
/// across the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// URL-safe identifier, unique within its year.
    pub slug: String,
    pub title: String,
    /// Publication date, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    pub category: Category,
    /// Path to the markdown source, relative to the blog root
    /// (e.g. `./posts/2024/My Post.md`).
    pub file: String,
    pub year: u16,
}

impl PostMeta {
    /// Location fragment addressing this post: `#post/{year}/{slug}`.
    pub fn fragment(&self) -> String {
        format!("#post/{}/{}", self.year, self.slug)
    }
}

/// A post after fetching and frontmatter resolution. Cached per file path
/// for the lifetime of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
    /// Raw markdown body, frontmatter block already stripped.
    pub content: String,
}

/// Format a date for display: day-month-year with a two-digit year,
/// e.g. `2024-06-01` → `01-06-24`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02}-{:02}-{:02}",
        date.day(),
        date.month(),
        date.year() % 100
    )
}
