//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! 3 posts in manifest
//!
//! Problems
//!     ./posts/2024/Gone.md: file not found (...)
//!
//! Warnings
//!     ./posts/2024/Notes.md: malformed frontmatter, rendering as-is
//!
//! Orphans (not in manifest)
//!     posts/2024/Draft.md
//!
//! Check failed: 1 problem
//! ```

use crate::author::NewPost;
use crate::check::CheckReport;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    for item in items {
        lines.push(format!("{}{}", indent(1), item));
    }
}

/// Format a check report: post count, then problems, warnings, and
/// orphans as sections (empty sections are omitted), then a verdict.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let mut lines = vec![format!("{} in manifest", count(report.post_count, "post"))];

    section(&mut lines, "Problems", &report.problems);
    section(&mut lines, "Warnings", &report.warnings);
    section(&mut lines, "Orphans (not in manifest)", &report.orphans);

    lines.push(String::new());
    if report.is_ok() {
        lines.push("Check passed".to_string());
    } else {
        lines.push(format!(
            "Check failed: {}",
            count(report.problems.len(), "problem")
        ));
    }
    lines
}

/// Print a check report to stdout.
pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}

/// Format the summary shown after `inkpost new` writes a post.
///
/// ```text
/// Created My New Post
///     Source: posts/2024/My New Post.md
///     Route:  #post/2024/my-new-post
/// ```
pub fn format_new_post_summary(post: &NewPost, file: &Path, replaced: bool) -> Vec<String> {
    let verb = if replaced { "Replaced" } else { "Created" };
    vec![
        format!("{verb} {}", post.title),
        format!("{}Source: {}", indent(1), file.display()),
        format!("{}Route:  {}", indent(1), post.meta().fragment()),
    ]
}

/// Print the new-post summary to stdout.
pub fn print_new_post_summary(post: &NewPost, file: &Path, replaced: bool) {
    for line in format_new_post_summary(post, file, replaced) {
        println!("{}", line);
    }
}
