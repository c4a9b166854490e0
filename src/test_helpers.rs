//! Shared fixtures for the unit test suite.
//!
//! `sample_manifest()` is the canonical three-post blog used across
//! modules: two 2024 posts and one 2023 post, with insertion order
//! deliberately different from date order so ordering bugs show up.

use crate::manifest::Manifest;
use crate::types::{Category, PostMeta};
use chrono::NaiveDate;

/// Build a `PostMeta` with the file path and year derived the same way
/// the authoring tool derives them.
pub fn meta(slug: &str, title: &str, date: &str, category: Category) -> PostMeta {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let year = chrono::Datelike::year(&date) as u16;
    PostMeta {
        slug: slug.to_string(),
        title: title.to_string(),
        date,
        category,
        file: format!("./posts/{year}/{title}.md"),
        year,
    }
}

/// Three posts: `summer-notes` (2024-06-01), `new-year` (2024-01-01),
/// `retro` (2023-12-31). Manifest order is new-year, retro, summer-notes.
pub fn sample_manifest() -> Manifest {
    Manifest {
        posts: vec![
            meta("new-year", "New Year Notes", "2024-01-01", Category::General),
            meta("retro", "A Year In Review", "2023-12-31", Category::WebDesign),
            meta("summer-notes", "Summer Notes", "2024-06-01", Category::General),
        ],
    }
}
