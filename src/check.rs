//! Blog directory validation: the logic behind `inkpost check`.
//!
//! Walks the whole blog — config, manifest, every referenced source file
//! — and reports what a reader would hit at runtime before it ships.
//! Problems are things the engine would fail on (missing manifest,
//! duplicate routes, missing post files); warnings are degradations the
//! engine survives (malformed frontmatter, frontmatter disagreeing with
//! the manifest); orphans are markdown files under `posts/` that no
//! manifest entry points at.

use crate::config::{BlogConfig, ConfigError};
use crate::frontmatter;
use crate::manifest::{Manifest, ManifestError};
use crate::slug::slugify;
use crate::types::PostMeta;
use chrono::Datelike;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Outcome of a full blog check.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub post_count: usize,
    /// Things the engine would fail on.
    pub problems: Vec<String>,
    /// Degradations the engine survives but an author should fix.
    pub warnings: Vec<String>,
    /// Markdown files under `posts/` with no manifest entry.
    pub orphans: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Validate the blog rooted at `dir`. Config or manifest failures are
/// hard errors (there is nothing meaningful to report against); every
/// per-post finding is collected into the report instead.
pub fn check(dir: &Path) -> Result<CheckReport, CheckError> {
    let config = BlogConfig::load(dir)?;
    let manifest_path = dir.join(&config.manifest_file);
    let manifest = Manifest::read(&manifest_path)?;

    let mut report = CheckReport {
        post_count: manifest.posts.len(),
        ..CheckReport::default()
    };

    check_entries(dir, &manifest, &mut report);
    find_orphans(dir, &manifest, &mut report);

    Ok(report)
}

fn check_entries(dir: &Path, manifest: &Manifest, report: &mut CheckReport) {
    let mut seen: HashSet<(u16, &str)> = HashSet::new();
    for post in &manifest.posts {
        if !seen.insert((post.year, post.slug.as_str())) {
            report
                .problems
                .push(format!("duplicate route {}/{}", post.year, post.slug));
        }
        check_entry_shape(post, report);

        let path = source_path(dir, &post.file);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                report
                    .problems
                    .push(format!("{}: file not found ({})", post.file, path.display()));
                continue;
            }
        };
        check_frontmatter(post, &raw, report);
    }
}

/// Internal consistency of a single manifest entry.
fn check_entry_shape(post: &PostMeta, report: &mut CheckReport) {
    if post.year != post.date.year() as u16 {
        report.problems.push(format!(
            "{}/{}: year field {} does not match date {}",
            post.year, post.slug, post.year, post.date
        ));
    }
    let expected = slugify(&post.title);
    if post.slug != expected {
        report.warnings.push(format!(
            "{}/{}: slug differs from slugified title ({expected:?})",
            post.year, post.slug
        ));
    }
}

/// Compare a post's frontmatter against its manifest entry.
fn check_frontmatter(post: &PostMeta, raw: &str, report: &mut CheckReport) {
    let parsed = frontmatter::parse(raw);
    if let Some(warning) = parsed.warning {
        report.warnings.push(format!("{}: {warning}", post.file));
        return;
    }
    let Some(fm) = parsed.meta else {
        report
            .warnings
            .push(format!("{}: no frontmatter block", post.file));
        return;
    };
    if let Some(title) = &fm.title
        && title != &post.title
    {
        report.warnings.push(format!(
            "{}: frontmatter title {title:?} differs from manifest {:?}",
            post.file, post.title
        ));
    }
    if let Some(date) = fm.date
        && date != post.date
    {
        report.warnings.push(format!(
            "{}: frontmatter date {date} differs from manifest {}",
            post.file, post.date
        ));
    }
    if let Some(category) = fm.category
        && category != post.category
    {
        report.warnings.push(format!(
            "{}: frontmatter category {category} differs from manifest {}",
            post.file, post.category
        ));
    }
}

/// Markdown files under `posts/` that no manifest entry references.
fn find_orphans(dir: &Path, manifest: &Manifest, report: &mut CheckReport) {
    let posts_dir = dir.join("posts");
    if !posts_dir.is_dir() {
        return;
    }
    let referenced: HashSet<PathBuf> = manifest
        .posts
        .iter()
        .map(|p| source_path(dir, &p.file))
        .collect();

    for entry in WalkDir::new(&posts_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "md") && !referenced.contains(path) {
            let rel = path.strip_prefix(dir).unwrap_or(path);
            report.orphans.push(rel.display().to_string());
        }
    }
}

/// Resolve a manifest-relative file reference (`./posts/...`) against
/// the blog directory.
fn source_path(dir: &Path, file: &str) -> PathBuf {
    dir.join(file.strip_prefix("./").unwrap_or(file))
}
