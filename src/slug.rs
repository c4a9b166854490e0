//! Slug generation shared by the authoring tool and the heading anchors.
//!
//! A slug is derived from display text by lowercasing, dropping anything
//! that is not an ASCII word character, and turning whitespace runs into
//! single hyphens. The same transform produces post slugs (`My Post!` →
//! `my-post`) and heading anchor ids, so deep links stay stable as long
//! as the text does not change.

/// Turn display text into a URL-safe slug.
///
/// - lowercase
/// - drop characters outside `[A-Za-z0-9_]`, whitespace, and `-`
/// - whitespace runs become a single `-`
/// - hyphen runs collapse to one
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = false;
    for c in text.to_lowercase().chars() {
        let mapped = if c.is_whitespace() {
            '-'
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            continue;
        };
        if mapped == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(mapped);
            prev_hyphen = false;
        }
    }
    slug
}
