//! YAML frontmatter extraction.
//!
//! A post source file may start with a metadata block delimited by `---`
//! lines:
//!
//! ```text
//! ---
//! title: "Designing in the Open"
//! date: 2024-06-01
//! category: web_design
//! ---
//! <markdown body>
//! ```
//!
//! The opening marker must be the very first line and the closing marker
//! must be a complete line. When the pattern is absent the whole input is
//! the body. When the block is present but is not valid YAML, parsing
//! degrades safely: the metadata is dropped, a warning is reported, and
//! the body is the entire original input (malformed block included). A
//! broken frontmatter block never stops a post from rendering — it only
//! loses its metadata override.
//!
//! All frontmatter fields are optional and unknown keys are ignored;
//! these files are written by hand and a stray key should not take the
//! post down.

use crate::types::Category;
use chrono::NaiveDate;
use serde::Deserialize;

/// Metadata block values. Each present field overrides the corresponding
/// manifest field for that post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

/// Result of splitting a document into metadata and body.
#[derive(Debug, PartialEq, Eq)]
pub struct Parsed<'a> {
    /// `None` when no block was found or the block was malformed.
    pub meta: Option<Frontmatter>,
    /// Borrowed from the input: everything after the closing marker, or
    /// the whole input when there is no (valid) block.
    pub body: &'a str,
    /// Set only on the malformed-block degradation path.
    pub warning: Option<String>,
}

impl Parsed<'_> {
    fn body_only(text: &str) -> Parsed<'_> {
        Parsed {
            meta: None,
            body: text,
            warning: None,
        }
    }
}

/// Split a document into an optional frontmatter block and the body.
pub fn parse(text: &str) -> Parsed<'_> {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Parsed::body_only(text);
    };
    if !is_marker(first) {
        return Parsed::body_only(text);
    }

    // Scan for the closing marker. It must end in a newline so that a
    // body region exists, even an empty one.
    let yaml_start = first.len();
    let mut pos = yaml_start;
    for line in lines {
        if is_marker(line) && line.ends_with('\n') {
            let yaml = &text[yaml_start..pos];
            let body = &text[pos + line.len()..];
            if yaml.trim().is_empty() {
                return Parsed {
                    meta: None,
                    body,
                    warning: None,
                };
            }
            return match serde_yaml::from_str::<Frontmatter>(yaml) {
                Ok(meta) => Parsed {
                    meta: Some(meta),
                    body,
                    warning: None,
                },
                Err(err) => Parsed {
                    meta: None,
                    body: text,
                    warning: Some(format!("malformed frontmatter, ignoring metadata: {err}")),
                },
            };
        }
        pos += line.len();
    }

    // Opening marker with no closing marker: not frontmatter at all.
    Parsed::body_only(text)
}

/// A marker line is `---` with nothing but trailing whitespace.
fn is_marker(line: &str) -> bool {
    line.trim_end() == "---"
}
