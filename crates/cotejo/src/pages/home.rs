//! Landing page.

use crate::page_object::{menu_link, PageObject, Selector};

/// The landing page object
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl PageObject for HomePage {
    fn url_pattern(&self) -> &str {
        "/"
    }

    fn selectors(&self) -> Vec<(&'static str, Selector)> {
        vec![
            ("book_a_demo", Selector::css(".header_panel__button")),
            ("about_menu", menu_link("About")),
            ("resources_menu", menu_link("Resources")),
        ]
    }

    fn page_name(&self) -> &str {
        "home"
    }
}
