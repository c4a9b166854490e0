//! # Inkpost
//!
//! A manifest-driven markdown blog engine. A blog is a directory: a
//! `posts.json` manifest listing every post's metadata, and the markdown
//! sources it points at. The engine loads the manifest once, then serves
//! two views — a year-grouped index and a single post — addressed by
//! hash-route fragments of the form `#post/<year>/<slug>`.
//!
//! # Architecture: Manifest In, Markup Out
//!
//! ```text
//! posts.json  →  Manifest     (metadata: slug, title, date, category, file)
//! *.md        →  ParsedPost   (frontmatter split off, body kept as markdown)
//! render      →  Markup       (footnotes rewritten, markdown → HTML, anchors)
//! ```
//!
//! The [`engine::Blog`] type owns the session state (manifest, parsed-post
//! cache, fetcher) and exposes `render_index` and `render_post`. Everything
//! it returns is data — [`maud::Markup`] plus a [`view::ViewState`] — so a
//! host can drive the pipeline without any display layer attached, and the
//! whole engine is testable with an in-memory fetcher.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session state and the render entry points |
//! | [`manifest`] | `posts.json` loading, validation, ordering, adjacency |
//! | [`frontmatter`] | YAML frontmatter block splitting with graceful degradation |
//! | [`footnotes`] | `[^id]` reference/definition rewriting into linked HTML |
//! | [`markdown`] | Markdown → HTML with slug-derived heading anchors |
//! | [`index`] | Year-grouped index markup |
//! | [`post`] | Single-post markup: article, navigation, breadcrumbs |
//! | [`router`] | `#post/<year>/<slug>` fragment parsing and view-state machine |
//! | [`cache`] | Session-scoped parsed-post cache with hit/miss stats |
//! | [`fetch`] | The [`fetch::Fetcher`] seam between the engine and its content |
//! | [`author`] | `inkpost new` — post scaffolding and manifest updates |
//! | [`check`] | `inkpost check` — whole-directory validation report |
//! | [`config`] | Optional `config.toml` loading |
//! | [`slug`] | The one slug algorithm shared by routes and heading anchors |
//! | [`types`] | Shared types: `Category`, `PostMeta`, `ParsedPost` |
//! | [`view`] | Display-intent flags a host maps onto its own chrome |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and interpolation is escaped by default — the only
//! unescaped insertion point is the markdown-converted post body, which is
//! deliberate and explicit ([`maud::PreEscaped`]).
//!
//! ## One Slug Algorithm
//!
//! Post slugs in the manifest and heading anchor ids inside rendered posts
//! use the same function, [`slug::slugify`]. Routes and in-page anchors
//! therefore can never disagree about how a title becomes an identifier.
//!
//! ## Degrade, Don't Die
//!
//! A malformed frontmatter block is the one recoverable error: the whole
//! file renders as markdown, manifest metadata fills the gaps, and the
//! engine records a warning the host can drain. Everything else — missing
//! manifest, unknown route, unreadable post file — is a typed error.

pub mod author;
pub mod cache;
pub mod check;
pub mod config;
pub mod engine;
pub mod fetch;
pub mod footnotes;
pub mod frontmatter;
pub mod index;
pub mod manifest;
pub mod markdown;
pub mod output;
pub mod post;
pub mod router;
pub mod slug;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
