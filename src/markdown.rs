//! Markdown to HTML conversion.
//!
//! Structural conversion is delegated to [pulldown-cmark] with the GFM
//! extensions the blog relies on (tables, strikethrough). Soft line
//! breaks stay soft; a single newline inside a paragraph does not become
//! a `<br>`.
//!
//! On top of the stock conversion, every heading receives a stable `id`
//! attribute derived from its inline text via [`crate::slug::slugify`],
//! so `## Build Tools` renders as `<h2 id="build-tools">`. This makes
//! every section deep-linkable with an in-page anchor fragment. The id is
//! injected by rewriting the parser's event stream: heading events are
//! normalized to plain (text, level) before the id is computed, so the
//! result does not depend on how the library tokenizes the heading's
//! inline content.
//!
//! [pulldown-cmark]: https://docs.rs/pulldown-cmark

use crate::slug::slugify;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Convert a markdown body (already footnote-preprocessed) to HTML.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events: Vec<Event<'_>> = Parser::new_ext(markdown, options).collect();
    let events = anchor_headings(events);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Compute the anchor id for a heading's inline text.
///
/// Exposed so link-producing code can predict the anchor for a given
/// heading without rendering.
pub fn heading_anchor(text: &str) -> String {
    slugify(text)
}

/// Rewrite heading start events to carry an id derived from the heading
/// text. Headings that already have an explicit id keep it.
fn anchor_headings(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes,
                attrs,
            }) => {
                let text = inline_text(&events[i + 1..]);
                out.push(Event::Start(Tag::Heading {
                    level: *level,
                    id: Some(CowStr::from(heading_anchor(&text))),
                    classes: classes.clone(),
                    attrs: attrs.clone(),
                }));
            }
            other => out.push(other.clone()),
        }
    }
    out
}

/// Collect the plain text of a heading: all text and code content up to
/// the matching end event.
fn inline_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_conversion() {
        let out = render("This is **bold** and *italic*.");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
    }

    #[test]
    fn headings_get_derived_ids() {
        let out = render("# My First Post\n\n## Build Tools & Tips");
        assert!(out.contains(r#"<h1 id="my-first-post">My First Post</h1>"#));
        assert!(out.contains(r#"<h2 id="build-tools-tips">Build Tools &amp; Tips</h2>"#));
    }

    #[test]
    fn heading_id_ignores_inline_markup() {
        // Emphasis and code spans contribute their text, not their tags.
        let out = render("## Using `cargo` *well*");
        assert!(out.contains(r#"id="using-cargo-well""#));
    }

    #[test]
    fn same_text_same_anchor() {
        assert_eq!(heading_anchor("Build Tools"), "build-tools");
        assert_eq!(heading_anchor("Build   Tools"), "build-tools");
    }

    #[test]
    fn gfm_tables_enabled() {
        let out = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<table>"));
    }

    #[test]
    fn gfm_strikethrough_enabled() {
        let out = render("~~gone~~");
        assert!(out.contains("<del>gone</del>"));
    }

    #[test]
    fn soft_breaks_do_not_become_br() {
        let out = render("line one\nline two");
        assert!(!out.contains("<br"));
    }

    #[test]
    fn fenced_code_blocks() {
        let out = render("```rust\nfn main() {}\n```");
        assert!(out.contains("<pre><code"));
        assert!(out.contains("fn main"));
    }

    #[test]
    fn raw_html_passes_through() {
        // Footnote preprocessing emits raw HTML; conversion must keep it.
        let out = render("text <sup id=\"fnref-1\"><a href=\"#fn-1\">1</a></sup> more");
        assert!(out.contains(r#"<sup id="fnref-1">"#));
    }
}
