//! Blog index markup.
//!
//! Groups the manifest's posts by year (newest year first) and renders a
//! section per year: a heading and a list of post entries. Within a year,
//! posts are ordered by date descending; posts sharing a date keep their
//! manifest order, so the output is deterministic for a given manifest.
//!
//! Each entry carries its category in a `data-category` attribute — the
//! hook the external filter UI matches against after the markup is
//! swapped in.

use crate::types::{PostMeta, format_date};
use maud::{Markup, html};

/// Render the full index for a post collection.
pub fn build_index(posts: &[PostMeta]) -> Markup {
    let mut years: Vec<u16> = posts.iter().map(|p| p.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    html! {
        @for year in years {
            div.posts {
                h2 { (year) }
                ul.list-of-posts {
                    @for post in posts_for_year(posts, year) {
                        (index_entry(post))
                    }
                }
            }
        }
    }
}

/// One index entry: post link, formatted date, category label.
fn index_entry(post: &PostMeta) -> Markup {
    html! {
        li.post data-category=(post.category.as_str()) {
            a href=(post.fragment()) { (post.title) }
            span class="super" { (format_date(post.date)) }
            span class=(post.category.css_class()) { (post.category.label()) }
        }
    }
}

/// Posts of one year, newest first, stable on ties.
fn posts_for_year(posts: &[PostMeta], year: u16) -> Vec<&PostMeta> {
    let mut year_posts: Vec<&PostMeta> = posts.iter().filter(|p| p.year == year).collect();
    year_posts.sort_by(|a, b| b.date.cmp(&a.date));
    year_posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{meta, sample_manifest};
    use crate::types::Category;

    #[test]
    fn years_listed_descending() {
        let manifest = sample_manifest();
        let html = build_index(&manifest.posts).into_string();
        let y2024 = html.find("<h2>2024</h2>").unwrap();
        let y2023 = html.find("<h2>2023</h2>").unwrap();
        assert!(y2024 < y2023);
    }

    #[test]
    fn posts_within_year_newest_first() {
        let manifest = sample_manifest();
        let html = build_index(&manifest.posts).into_string();
        // 2024-06-01 before 2024-01-01.
        let summer = html.find("summer-notes").unwrap();
        let new_year = html.find("new-year").unwrap();
        assert!(summer < new_year);
    }

    #[test]
    fn equal_dates_keep_manifest_order() {
        let posts = vec![
            meta("first", "First", "2024-05-05", Category::General),
            meta("second", "Second", "2024-05-05", Category::General),
        ];
        let html = build_index(&posts).into_string();
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn deterministic_output() {
        let manifest = sample_manifest();
        let a = build_index(&manifest.posts).into_string();
        let b = build_index(&manifest.posts).into_string();
        assert_eq!(a, b);
    }

    #[test]
    fn entry_structure() {
        let posts = vec![meta(
            "css-notes",
            "CSS Notes",
            "2024-03-10",
            Category::WebDesign,
        )];
        let html = build_index(&posts).into_string();

        assert!(html.contains(r#"data-category="web_design""#));
        assert!(html.contains(r##"href="#post/2024/css-notes""##));
        assert!(html.contains("CSS Notes"));
        assert!(html.contains("10-03-24"));
        assert!(html.contains(r#"class="sub-web""#));
        assert!(html.contains("Web Design"));
    }

    #[test]
    fn empty_manifest_renders_nothing() {
        assert_eq!(build_index(&[]).into_string(), "");
    }

    #[test]
    fn titles_are_escaped() {
        let posts = vec![meta(
            "xss",
            "<script>alert(1)</script>",
            "2024-01-01",
            Category::General,
        )];
        let html = build_index(&posts).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
