//! Careers page: open-position filters.

use crate::checklist::{Checklist, ChecklistSummary};
use crate::page_object::{PageObject, Selector};
use crate::result::{CotejoError, CotejoResult};
use serde::{Deserialize, Serialize};

/// Filter value selected when no filter is applied
pub const ALL_FILTER_VALUE: &str = "all";

/// Message shown when no position matches the filters
pub const NO_RESULTS_TEXT: &str = "No open positions found.";

/// One job posting as read by the driver
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Class list of the article element
    pub classes: Vec<String>,
    /// Whether the `hidden` attribute is present
    pub hidden_attr: bool,
    /// Inline `style` attribute
    pub style: Option<String>,
    /// Whether the browser reports the article as visible
    pub rendered_visible: bool,
    /// Department text (untrimmed)
    pub department: String,
    /// Location text (untrimmed)
    pub location: String,
}

impl ArticleRecord {
    /// Create a visible article
    #[must_use]
    pub fn new(department: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            classes: vec![String::from("careers_positions__article")],
            hidden_attr: false,
            style: None,
            rendered_visible: true,
            department: department.into(),
            location: location.into(),
        }
    }

    /// Mark the article hidden by the filter script (class + not rendered)
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.classes.push(String::from("hidden"));
        self.rendered_visible = false;
        self
    }

    /// Whether the filter script hid this article
    ///
    /// Hidden means a `hidden` class, a `hidden` attribute, or an inline
    /// `display:none`.
    #[must_use]
    pub fn is_filtered_out(&self) -> bool {
        self.classes.iter().any(|c| c == "hidden")
            || self.hidden_attr
            || self
                .style
                .as_deref()
                .is_some_and(|style| style.contains("display:none"))
    }
}

/// Careers page state as read by the driver after a filter change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareersView {
    /// Selected value of the department filter
    pub department_value: String,
    /// Selected value of the location filter
    pub location_value: String,
    /// Text of the open positions counter
    pub counter_text: String,
    /// Every job posting on the page
    pub articles: Vec<ArticleRecord>,
    /// Whether the no-results message is visible
    pub no_results_visible: bool,
    /// Text of the no-results message
    pub no_results_text: String,
}

/// Parse the leading integer of the open-positions counter
pub fn open_positions_count(counter_text: &str) -> CotejoResult<usize> {
    let trimmed = counter_text.trim_start();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().map_err(|_| {
        CotejoError::assertion(format!(
            "open positions counter '{counter_text}' is not a number"
        ))
    })
}

/// The careers page object
#[derive(Debug, Clone, Copy, Default)]
pub struct CareersPage;

impl PageObject for CareersPage {
    fn url_pattern(&self) -> &str {
        "/careers"
    }

    fn selectors(&self) -> Vec<(&'static str, Selector)> {
        vec![
            (
                "department_filter",
                Selector::css("select.careers_positions__filters-department"),
            ),
            (
                "location_filter",
                Selector::css("select.careers_positions__filters-location"),
            ),
            (
                "counter",
                Selector::css(".careers_positions__header-heading-counter"),
            ),
            ("articles", Selector::css("article.careers_positions__article")),
            (
                "visible_articles",
                Selector::css(
                    "article.careers_positions__article:not(.hidden):not([hidden]):not([style*=\"display:none\"])",
                ),
            ),
            (
                "article_department",
                Selector::css(".careers_positions__article-department"),
            ),
            (
                "article_location",
                Selector::css(".careers_positions__article-location"),
            ),
            ("no_results", Selector::css(".careers_positions__no_results")),
        ]
    }

    fn page_name(&self) -> &str {
        "careers"
    }
}

impl CareersPage {
    /// Articles the browser renders as visible
    #[must_use]
    pub fn visible_article_count(&self, view: &CareersView) -> usize {
        view.articles.iter().filter(|a| a.rendered_visible).count()
    }

    /// Both filters on `all`, counter equal to visible articles
    pub fn verify_initial_filters_are_default(
        &self,
        view: &CareersView,
    ) -> CotejoResult<ChecklistSummary> {
        let mut list = Checklist::new("careers default filters");
        list.check_eq(
            view.department_value.as_str(),
            ALL_FILTER_VALUE,
            "department filter",
        );
        list.check_eq(
            view.location_value.as_str(),
            ALL_FILTER_VALUE,
            "location filter",
        );
        self.check_filtered(view, None, None, &mut list)?;
        list.finish()
    }

    /// Counter consistent and every visible article matching the given filters
    ///
    /// `None` leaves that filter unchecked.
    pub fn verify_filtered(
        &self,
        view: &CareersView,
        department: Option<&str>,
        location: Option<&str>,
    ) -> CotejoResult<ChecklistSummary> {
        let context = match (department, location) {
            (Some(d), Some(l)) => format!("careers filtered by '{d}' in '{l}'"),
            (Some(d), None) => format!("careers filtered by '{d}'"),
            (None, Some(l)) => format!("careers filtered in '{l}'"),
            (None, None) => String::from("careers unfiltered"),
        };
        let mut list = Checklist::new(context);
        self.check_filtered(view, department, location, &mut list)?;
        list.finish()
    }

    /// Counter consistent and every visible article in `department`
    pub fn verify_filtered_by_department(
        &self,
        view: &CareersView,
        department: &str,
    ) -> CotejoResult<ChecklistSummary> {
        self.verify_filtered(view, Some(department), None)
    }

    /// Counter consistent and every visible article in `department` at `location`
    pub fn verify_filtered_by_department_and_location(
        &self,
        view: &CareersView,
        department: &str,
        location: &str,
    ) -> CotejoResult<ChecklistSummary> {
        self.verify_filtered(view, Some(department), Some(location))
    }

    fn check_filtered(
        &self,
        view: &CareersView,
        department: Option<&str>,
        location: Option<&str>,
        list: &mut Checklist,
    ) -> CotejoResult<()> {
        let counter = open_positions_count(&view.counter_text)?;
        list.check_eq(
            counter,
            self.visible_article_count(view),
            "open positions counter vs visible articles",
        );

        let shown: Vec<(usize, &ArticleRecord)> = view
            .articles
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_filtered_out())
            .collect();

        if shown.is_empty() {
            list.check(view.no_results_visible, || {
                String::from("no articles shown but the no-results message is not visible")
            });
            if view.no_results_visible {
                list.check_eq(
                    view.no_results_text.trim(),
                    NO_RESULTS_TEXT,
                    "no-results message",
                );
            }
            tracing::info!(articles = view.articles.len(), "no results shown, all articles hidden");
            return Ok(());
        }

        for (index, article) in shown {
            if let Some(expected) = department {
                list.check_eq(
                    article.department.trim(),
                    expected,
                    format!("article #{index} department"),
                );
            }
            if let Some(expected) = location {
                list.check_eq(
                    article.location.trim(),
                    expected,
                    format!("article #{index} location"),
                );
            }
        }
        Ok(())
    }
}
