//! Resource library: category listings and resource detail URLs.

use crate::checklist::{Checklist, ChecklistSummary};
use crate::catalog::ResourceCategory;
use crate::page_object::{menu_link, menu_section, PageObject, Selector};
use crate::result::{CotejoError, CotejoResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Header menu holding the resource categories
pub const RESOURCES_MENU: &str = "Resources";

/// One listing card as read by the driver
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceItem {
    /// Raw `class` attribute of the card
    pub classes: String,
    /// Visible category tag (e.g. "Videos")
    pub category_label: String,
    /// Visible title
    pub title: String,
}

impl ResourceItem {
    /// Card of `category` with the given title
    #[must_use]
    pub fn new(category: ResourceCategory, title: impl Into<String>) -> Self {
        Self {
            classes: format!("e-loop-item {}", category.class_name()),
            category_label: category.label().to_string(),
            title: title.into(),
        }
    }

    /// Whether the class list holds `class_name` as a whole token
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.split_whitespace().any(|c| c == class_name)
    }
}

#[allow(clippy::expect_used)] // literal patterns
fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid punctuation pattern"))
}

#[allow(clippy::expect_used)] // literal patterns
fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

#[allow(clippy::expect_used)] // literal patterns
fn hyphen_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid hyphen pattern"))
}

/// URL slug of a resource title
///
/// Lowercases, drops everything except ASCII word characters, whitespace and
/// `-`, turns whitespace runs into `-`, then collapses `-` runs.
#[must_use]
pub fn resource_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = punctuation().replace_all(&lowered, "");
    let hyphenated = whitespace_run().replace_all(&stripped, "-");
    hyphen_run().replace_all(&hyphenated, "-").into_owned()
}

/// URL segment of a category label: `"Videos"` becomes `"video"`
#[must_use]
pub fn category_slug(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    match lowered.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => lowered,
    }
}

/// Path fragment a resource detail URL must contain
#[must_use]
pub fn expected_url_fragment(category_label: &str, title: &str) -> String {
    format!(
        "/{}/{}/",
        category_slug(category_label),
        resource_slug(title)
    )
}

/// Resource library listing for one category
#[derive(Debug, Clone, Copy)]
pub struct ResourcesPage {
    category: ResourceCategory,
}

impl Default for ResourcesPage {
    fn default() -> Self {
        Self::new(ResourceCategory::Videos)
    }
}

impl PageObject for ResourcesPage {
    fn url_pattern(&self) -> &str {
        "/resources/*"
    }

    fn selectors(&self) -> Vec<(&'static str, Selector)> {
        vec![
            ("menu", menu_link(RESOURCES_MENU)),
            ("section", menu_section(self.category.label())),
            ("items", Selector::css(".e-loop-item")),
            ("item_category", Selector::css("a[rel=\"tag\"]")),
            ("item_title", Selector::css("h3.elementor-heading-title a")),
            ("item_link", Selector::css("a:has(img)")),
            (
                "next_page",
                Selector::css("nav.elementor-pagination a.page-numbers.next"),
            ),
        ]
    }

    fn page_name(&self) -> &str {
        self.category.label()
    }
}

impl ResourcesPage {
    /// Listing of `category`
    #[must_use]
    pub const fn new(category: ResourceCategory) -> Self {
        Self { category }
    }

    /// Category this listing shows
    #[must_use]
    pub const fn category(&self) -> ResourceCategory {
        self.category
    }

    /// The listing is non-empty and every card carries the category class
    pub fn verify_all_in_category(&self, items: &[ResourceItem]) -> CotejoResult<ChecklistSummary> {
        let mut list = Checklist::new(format!("{} listing", self.category.label()));
        self.check_page(items, None, &mut list);
        list.finish()
    }

    /// [`Self::verify_all_in_category`] over every paginated page
    pub fn verify_pages(&self, pages: &[Vec<ResourceItem>]) -> CotejoResult<ChecklistSummary> {
        let mut list = Checklist::new(format!(
            "{} listing across {} page(s)",
            self.category.label(),
            pages.len()
        ));
        list.check_not_empty(pages, "pages");
        for (page, items) in pages.iter().enumerate() {
            tracing::debug!(page = page + 1, items = items.len(), "verifying listing page");
            self.check_page(items, Some(page + 1), &mut list);
        }
        list.finish()
    }

    fn check_page(&self, items: &[ResourceItem], page: Option<usize>, list: &mut Checklist) {
        let prefix = page.map_or_else(String::new, |p| format!("page {p} "));
        list.check_not_empty(items, format!("{prefix}items"));
        let class_name = self.category.class_name();
        for (index, item) in items.iter().enumerate() {
            list.check(item.has_class(class_name), || {
                format!(
                    "{prefix}item {index}: class '{}' does not contain '{class_name}'",
                    item.classes
                )
            });
        }
    }

    /// Check the URL reached by opening the card at `index`
    ///
    /// Returns the expected fragment on success.
    pub fn verify_opened_resource(
        &self,
        items: &[ResourceItem],
        index: usize,
        url: &str,
    ) -> CotejoResult<String> {
        let item = items.get(index).ok_or(CotejoError::IndexOutOfRange {
            index,
            count: items.len(),
        })?;
        if item.category_label.trim().is_empty() || item.title.trim().is_empty() {
            return Err(CotejoError::assertion(format!(
                "item {index} has no visible category or title"
            )));
        }

        let fragment = expected_url_fragment(&item.category_label, &item.title);
        if !url.contains(&fragment) {
            return Err(CotejoError::assertion(format!(
                "opened URL '{url}' does not contain '{fragment}'"
            )));
        }
        tracing::info!(index, %fragment, "resource opened at expected URL");
        Ok(fragment)
    }
}
