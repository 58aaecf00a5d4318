//! Page objects and verifiers for the site under test.
//!
//! Each page exposes its selectors through [`PageObject`](crate::PageObject)
//! and checks the records a browser driver reads back from it.

mod book_demo;
mod careers;
mod home;
mod resources;
mod widget;

pub use book_demo::{
    BookDemoForm, BookDemoPage, FieldAction, FieldState, FormField, BOOK_A_DEMO_PATH,
};
pub use careers::{
    open_positions_count, ArticleRecord, CareersPage, CareersView, ALL_FILTER_VALUE,
    NO_RESULTS_TEXT,
};
pub use home::HomePage;
pub use resources::{
    category_slug, expected_url_fragment, resource_slug, ResourceItem, ResourcesPage,
    RESOURCES_MENU,
};
pub use widget::{
    AccessibilityWidget, HighlightLinksCheck, HighlightLinksOutcome, ToggleState, WidgetToggle,
    HIGHLIGHT_LINKS_BODY_CLASS, TRACKED_ELEMENTS,
};
