//! View-layer intent, as plain data.
//!
//! The engine produces markup plus a [`ViewState`] describing which page
//! regions should be visible and whether to reset scroll. Applying it —
//! toggling elements, swapping innerHTML, scrolling — is the host's job.
//! Keeping the side effects out of the rendering functions is what lets
//! the whole pipeline run and be tested without a DOM.

/// Visibility and side-effect intents for the two views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub show_index: bool,
    pub show_post: bool,
    /// Intro blurb above the index; index view only.
    pub show_intro: bool,
    /// Category filter controls; index view only.
    pub show_filters: bool,
    pub show_breadcrumbs: bool,
    pub scroll_to_top: bool,
}

impl ViewState {
    /// State for the blog index view.
    pub fn index() -> Self {
        Self {
            show_index: true,
            show_post: false,
            show_intro: true,
            show_filters: true,
            show_breadcrumbs: false,
            scroll_to_top: false,
        }
    }

    /// State for the single-post view: index chrome hidden, breadcrumbs
    /// shown, scroll reset to the top of the article.
    pub fn post() -> Self {
        Self {
            show_index: false,
            show_post: true,
            show_intro: false,
            show_filters: false,
            show_breadcrumbs: true,
            scroll_to_top: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_chrome() {
        let v = ViewState::index();
        assert!(v.show_index && v.show_intro && v.show_filters);
        assert!(!v.show_post && !v.show_breadcrumbs && !v.scroll_to_top);
    }

    #[test]
    fn post_hides_chrome_and_resets_scroll() {
        let v = ViewState::post();
        assert!(v.show_post && v.show_breadcrumbs && v.scroll_to_top);
        assert!(!v.show_index && !v.show_intro && !v.show_filters);
    }
}
