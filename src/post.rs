//! Single-post markup.
//!
//! Pure markup builders for the post view: the article (title, formatted
//! date, category, rule, converted body, previous/next navigation) and
//! the breadcrumb trail. The engine assembles the inputs; nothing here
//! performs I/O.

use crate::types::{ParsedPost, PostMeta, format_date};
use crate::view::ViewState;
use crate::{footnotes, markdown};
use maud::{Markup, PreEscaped, html};

/// Everything the host needs to display a post.
#[derive(Debug)]
pub struct PostView {
    pub article: Markup,
    pub breadcrumbs: Markup,
    pub view: ViewState,
}

/// Build the post view from a parsed post and its manifest context.
pub fn render(
    post: &ParsedPost,
    meta: &PostMeta,
    prev: Option<&PostMeta>,
    next: Option<&PostMeta>,
) -> PostView {
    let body = markdown::render(&footnotes::rewrite(&post.content));

    let article = html! {
        h1 { (post.title) }
        div.post-meta {
            span.post-date { (format_date(post.date)) }
            span.post-category { (post.category.label()) }
        }
        hr;
        (PreEscaped(body))
        (nav_links(prev, next))
    };

    PostView {
        article,
        breadcrumbs: breadcrumbs(meta),
        view: ViewState::post(),
    }
}

/// Previous/next navigation. Both slots always render so the layout
/// stays balanced; a boundary gets an empty placeholder.
fn nav_links(prev: Option<&PostMeta>, next: Option<&PostMeta>) -> Markup {
    html! {
        div.post-navigation {
            @if let Some(p) = prev {
                a.nav-button.prev-post href=(p.fragment()) {
                    span.nav-icon { "\u{2190}" }
                    span.nav-text {
                        span.nav-label { "Previous" }
                        span.nav-title { (p.title) }
                    }
                }
            } @else {
                div {}
            }
            @if let Some(n) = next {
                a.nav-button.next-post href=(n.fragment()) {
                    span.nav-text {
                        span.nav-label { "Next" }
                        span.nav-title { (n.title) }
                    }
                    span.nav-icon { "\u{2192}" }
                }
            } @else {
                div {}
            }
        }
    }
}

/// Breadcrumb trail: Blog › Category › Title. The category crumb carries
/// `data-category` so the host can trigger the matching index filter.
pub fn breadcrumbs(meta: &PostMeta) -> Markup {
    html! {
        a href="#blog" { "Blog" }
        span.breadcrumb-separator { "\u{203a}" }
        a href="#blog" data-category=(meta.category.as_str()) { (meta.category.label()) }
        span.breadcrumb-separator { "\u{203a}" }
        span.breadcrumb-current { (meta.title) }
    }
}
