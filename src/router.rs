//! Hash-fragment routing.
//!
//! The engine has two views, the index and a single post, addressed by
//! the location fragment:
//!
//! - `#` (or nothing, or `#blog`) → index
//! - `#post/<4-digit-year>/<slug>` → that post
//!
//! Anything else depends on where we are: while a post is visible an
//! unrecognized fragment is an in-document anchor (heading ids, footnote
//! back-links) and must not re-route; otherwise it falls back to the
//! index. The router is re-evaluated on every navigation event and keeps
//! no history of its own — routes are re-derived from the fragment each
//! time, so replaying a navigation is always safe.

/// A resolved view target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Post { year: u16, slug: String },
}

/// Outcome of a navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Switch to (or re-show) a view.
    Show(Route),
    /// In-page anchor within the current post; no transition.
    Anchor,
}

/// Parse a location fragment into a route. Returns `None` for fragments
/// that are neither an index marker nor a well-formed post address.
pub fn parse_fragment(fragment: &str) -> Option<Route> {
    let frag = fragment.strip_prefix('#').unwrap_or(fragment);
    if frag.is_empty() || frag == "blog" {
        return Some(Route::Index);
    }
    let rest = frag.strip_prefix("post/")?;
    let (year, slug) = rest.split_once('/')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if slug.is_empty() || slug.contains('/') {
        return None;
    }
    let year = year.parse().ok()?;
    Some(Route::Post {
        year,
        slug: slug.to_string(),
    })
}

/// Two-state machine driven by navigation events.
#[derive(Debug, Default)]
pub struct Router {
    current: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible route, if any navigation has happened.
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Resolve a fragment against the current state.
    pub fn navigate(&mut self, fragment: &str) -> Navigation {
        match parse_fragment(fragment) {
            Some(route) => {
                self.current = Some(route.clone());
                Navigation::Show(route)
            }
            None => {
                if matches!(self.current, Some(Route::Post { .. })) {
                    Navigation::Anchor
                } else {
                    self.current = Some(Route::Index);
                    Navigation::Show(Route::Index)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_route(year: u16, slug: &str) -> Route {
        Route::Post {
            year,
            slug: slug.to_string(),
        }
    }

    #[test]
    fn index_markers() {
        assert_eq!(parse_fragment(""), Some(Route::Index));
        assert_eq!(parse_fragment("#"), Some(Route::Index));
        assert_eq!(parse_fragment("#blog"), Some(Route::Index));
    }

    #[test]
    fn well_formed_post_fragment() {
        assert_eq!(
            parse_fragment("#post/2024/my-post"),
            Some(post_route(2024, "my-post"))
        );
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(
            parse_fragment("post/2024/my-post"),
            Some(post_route(2024, "my-post"))
        );
    }

    #[test]
    fn malformed_post_fragments_rejected() {
        assert_eq!(parse_fragment("#post/24/my-post"), None); // short year
        assert_eq!(parse_fragment("#post/20x4/slug"), None); // non-digit
        assert_eq!(parse_fragment("#post/2024/"), None); // empty slug
        assert_eq!(parse_fragment("#post/2024"), None); // no slug segment
        assert_eq!(parse_fragment("#post/2024/a/b"), None); // extra segment
        assert_eq!(parse_fragment("#posts/2024/a"), None); // wrong prefix
    }

    #[test]
    fn arbitrary_fragment_is_not_a_route() {
        assert_eq!(parse_fragment("#some-heading"), None);
        assert_eq!(parse_fragment("#fn-2"), None);
    }

    #[test]
    fn router_routes_to_post() {
        let mut router = Router::new();
        let nav = router.navigate("#post/2024/my-post");
        assert_eq!(nav, Navigation::Show(post_route(2024, "my-post")));
        assert_eq!(router.current(), Some(&post_route(2024, "my-post")));
    }

    #[test]
    fn empty_fragment_routes_to_index() {
        let mut router = Router::new();
        assert_eq!(router.navigate("#"), Navigation::Show(Route::Index));
        assert_eq!(router.current(), Some(&Route::Index));
    }

    #[test]
    fn anchor_while_on_post_does_not_reroute() {
        let mut router = Router::new();
        router.navigate("#post/2024/my-post");
        let nav = router.navigate("#some-heading");
        assert_eq!(nav, Navigation::Anchor);
        // Still on the post.
        assert_eq!(router.current(), Some(&post_route(2024, "my-post")));
    }

    #[test]
    fn malformed_fragment_on_index_falls_back_to_index() {
        let mut router = Router::new();
        router.navigate("#blog");
        assert_eq!(router.navigate("#garbage"), Navigation::Show(Route::Index));
    }

    #[test]
    fn malformed_fragment_before_any_view_shows_index() {
        let mut router = Router::new();
        assert_eq!(router.navigate("#garbage"), Navigation::Show(Route::Index));
    }

    #[test]
    fn blog_marker_leaves_post_view() {
        let mut router = Router::new();
        router.navigate("#post/2024/my-post");
        assert_eq!(router.navigate("#blog"), Navigation::Show(Route::Index));
        assert_eq!(router.current(), Some(&Route::Index));
    }

    #[test]
    fn navigation_is_replay_safe() {
        let mut router = Router::new();
        let first = router.navigate("#post/2024/my-post");
        let second = router.navigate("#post/2024/my-post");
        assert_eq!(first, second);
    }
}
