//! Cotejo: style snapshot comparison for UI toggle tests
//!
//! Cotejo (Spanish: "comparison, collation") records the computed styles of a
//! set of page elements before a UI toggle, while it is on, and after it is
//! switched off again, then answers two questions: did every element change,
//! and did every element go back to how it looked?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  capture   ┌──────────────┐  compare   ┌──────────────┐
//! │ ToggleDriver│───────────►│ SnapshotStore│───────────►│ PhaseSummary │
//! │ (browser)   │  per phase │ baseline/    │  identity  │ violations / │
//! │             │            │ toggled/     │  or index  │ no-data      │
//! └─────────────┘            │ reverted     │            └──────────────┘
//!                            └──────────────┘
//! ```
//!
//! Page objects under [`pages`] carry the selectors and verifiers for the
//! rest of the site checks (careers filters, resource listings, the booking
//! form).
//!
//! ```
//! use cotejo::prelude::*;
//!
//! let link = StyleAttributes::new("A", "Home");
//! let underlined = link.clone().with_style(StyleKey::TextDecoration, "underline");
//!
//! let mut comparator = StyleSnapshotComparator::new();
//! comparator.record_snapshot(Phase::Baseline, vec![link.clone()]);
//! comparator.record_snapshot(Phase::Toggled, vec![underlined]);
//! comparator.record_snapshot(Phase::Reverted, vec![link]);
//!
//! assert!(comparator.assert_all_changed(Phase::Toggled).is_ok());
//! assert!(comparator.assert_all_reverted(Phase::Reverted).is_ok());
//! ```

#![warn(missing_docs)]

#[allow(clippy::missing_errors_doc)]
mod capture;
mod catalog;
mod checklist;
#[allow(clippy::missing_errors_doc, clippy::must_use_candidate)]
mod comparator;
mod config;
mod page_object;
/// Page objects for the site under test
pub mod pages;
mod report;
mod result;
mod snapshot;
mod style;

pub use capture::{
    parse_captured, RecordedRun, ScriptedCapture, StyleCapture, ToggleDriver,
    COMPUTED_STYLE_SCRIPT,
};
pub use catalog::{Department, Location, ResourceCategory};
pub use checklist::{Checklist, ChecklistSummary, FailedCheck};
pub use comparator::StyleSnapshotComparator;
pub use config::{ComparatorConfig, Correlation, DEFAULT_LABEL_MAX_CHARS};
pub use page_object::{menu_link, menu_section, PageObject, Selector, UrlMatcher};
pub use pages::{category_slug, expected_url_fragment, resource_slug};
pub use report::{
    ComparisonReport, Expectation, MissingReason, PhaseSummary, ReportStatus, Violation,
    ViolationReport, NO_DATA_MARKER,
};
pub use result::{CotejoError, CotejoResult};
pub use snapshot::{ElementSnapshot, Phase, SnapshotStore};
pub use style::{AttributeChange, ElementKey, StyleAttributes, StyleKey};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::capture::*;
    pub use super::catalog::*;
    pub use super::checklist::*;
    pub use super::comparator::*;
    pub use super::config::*;
    pub use super::page_object::*;
    pub use super::pages::*;
    pub use super::report::*;
    pub use super::result::*;
    pub use super::snapshot::*;
    pub use super::style::*;
}
