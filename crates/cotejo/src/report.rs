//! Comparison reports and assertion diagnostics.
//!
//! Reports are plain data so the calling test layer can inspect them, print
//! them, or serialize them next to other test artifacts.

use crate::snapshot::Phase;
use crate::style::AttributeChange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker carried by reports for elements without later-phase data
pub const NO_DATA_MARKER: &str = "no-data";

/// Why an element has no record in the later phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// The later snapshot ends before this position
    BeyondCapture,
    /// No later record carries this element's identity
    IdentityNotFound,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeyondCapture => f.write_str("later snapshot is shorter"),
            Self::IdentityNotFound => f.write_str("element identity not found"),
        }
    }
}

/// Outcome of correlating one baseline element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportStatus {
    /// Both captures present and compared
    Compared {
        /// Position in the later snapshot
        matched_index: usize,
    },
    /// No later-phase data; excluded from pass/fail judgment
    NoData {
        /// Why data is missing
        reason: MissingReason,
    },
}

/// Per-element result of comparing a phase to baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Position of the element in the baseline snapshot
    pub index: usize,
    /// Tag name, from the later capture when available
    pub tag_name: String,
    /// Display label, from the later capture when available
    pub label: String,
    /// Every monitored style that differs from baseline
    pub changes: Vec<AttributeChange>,
    /// Whether any monitored style differs
    pub has_changed: bool,
    /// Correlation outcome
    pub status: ReportStatus,
}

impl ComparisonReport {
    /// Report for an element compared against its later record
    #[must_use]
    pub fn compared(
        index: usize,
        matched_index: usize,
        tag_name: impl Into<String>,
        label: impl Into<String>,
        changes: Vec<AttributeChange>,
    ) -> Self {
        Self {
            index,
            tag_name: tag_name.into(),
            label: label.into(),
            has_changed: !changes.is_empty(),
            changes,
            status: ReportStatus::Compared { matched_index },
        }
    }

    /// Report for an element without later-phase data
    #[must_use]
    pub fn no_data(
        index: usize,
        tag_name: impl Into<String>,
        label: impl Into<String>,
        reason: MissingReason,
    ) -> Self {
        Self {
            index,
            tag_name: tag_name.into(),
            label: label.into(),
            changes: Vec::new(),
            has_changed: false,
            status: ReportStatus::NoData { reason },
        }
    }

    /// Whether the later phase had no data for this element
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self.status, ReportStatus::NoData { .. })
    }

    /// `"no-data"` for skipped elements
    #[must_use]
    pub const fn marker(&self) -> Option<&'static str> {
        if self.is_no_data() {
            Some(NO_DATA_MARKER)
        } else {
            None
        }
    }

    /// Element heading used in diagnostics: `[TAG] "label" (Element i)`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("[{}] \"{}\" (Element {})", self.tag_name, self.label, self.index)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ReportStatus::NoData { reason } => {
                write!(f, "{} {NO_DATA_MARKER}: {reason}", self.heading())
            }
            ReportStatus::Compared { .. } if self.changes.is_empty() => {
                write!(f, "{} styles unchanged", self.heading())
            }
            ReportStatus::Compared { .. } => {
                write!(f, "{} styles changed:", self.heading())?;
                for change in &self.changes {
                    write!(f, "\n  {change}")?;
                }
                Ok(())
            }
        }
    }
}

/// What an assertion expects of a phase relative to baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// Every element must differ from baseline
    Changed,
    /// Every element must equal baseline
    Reverted,
}

impl Expectation {
    /// Whether a compared report breaks this expectation
    #[must_use]
    pub const fn is_violated_by(self, report: &ComparisonReport) -> bool {
        match self {
            Self::Changed => !report.has_changed,
            Self::Reverted => report.has_changed,
        }
    }

    const fn failure_text(self) -> &'static str {
        match self {
            Self::Changed => "styles did NOT change",
            Self::Reverted => "styles not restored",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed => f.write_str("changed"),
            Self::Reverted => f.write_str("reverted"),
        }
    }
}

/// One element that broke an expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Baseline position
    pub index: usize,
    /// Tag name
    pub tag_name: String,
    /// Display label
    pub label: String,
    /// Differences from baseline (empty when nothing changed)
    pub changes: Vec<AttributeChange>,
}

impl From<&ComparisonReport> for Violation {
    fn from(report: &ComparisonReport) -> Self {
        Self {
            index: report.index,
            tag_name: report.tag_name.clone(),
            label: report.label.clone(),
            changes: report.changes.clone(),
        }
    }
}

/// Every violation found by one assertion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// Phase compared against baseline
    pub phase: Phase,
    /// What was expected
    pub expectation: Expectation,
    /// Elements with data that were judged
    pub judged: usize,
    /// Elements skipped for lack of data
    pub skipped: usize,
    /// Offending elements, in baseline order
    pub violations: Vec<Violation>,
}

impl ViolationReport {
    /// Indices of offending elements
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.violations.iter().map(|v| v.index).collect()
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} elements in phase '{}' were not {}",
            self.violations.len(),
            self.judged,
            self.phase,
            self.expectation
        )?;
        for violation in &self.violations {
            write!(
                f,
                "\n[{}] \"{}\" (Element {}) {}",
                violation.tag_name,
                violation.label,
                violation.index,
                self.expectation.failure_text()
            )?;
            for change in &violation.changes {
                write!(f, "\n  {change}")?;
            }
        }
        Ok(())
    }
}

/// Aggregate of one phase's comparison against baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    /// Phase compared against baseline
    pub phase: Phase,
    /// Expectation that was asserted, if any
    pub expectation: Option<Expectation>,
    /// Baseline elements
    pub total: usize,
    /// Elements with at least one changed style
    pub changed: usize,
    /// Elements with identical styles
    pub unchanged: usize,
    /// Elements without later-phase data
    pub skipped: usize,
    /// Per-element reports, in baseline order
    pub reports: Vec<ComparisonReport>,
}

impl PhaseSummary {
    /// Tally reports for a phase
    #[must_use]
    pub fn new(
        phase: Phase,
        expectation: Option<Expectation>,
        reports: Vec<ComparisonReport>,
    ) -> Self {
        let skipped = reports.iter().filter(|r| r.is_no_data()).count();
        let changed = reports.iter().filter(|r| r.has_changed).count();
        Self {
            phase,
            expectation,
            total: reports.len(),
            changed,
            unchanged: reports.len() - changed - skipped,
            skipped,
            reports,
        }
    }

    /// Elements that had data and were judged
    #[must_use]
    pub const fn judged(&self) -> usize {
        self.changed + self.unchanged
    }

    /// Reports that break `expectation`, skipping elements without data
    #[must_use]
    pub fn violations(&self, expectation: Expectation) -> Vec<Violation> {
        self.reports
            .iter()
            .filter(|r| !r.is_no_data() && expectation.is_violated_by(r))
            .map(Violation::from)
            .collect()
    }

    /// Human-readable multi-line rendering
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "phase {}: {} elements, {} changed, {} unchanged, {} {NO_DATA_MARKER}\n",
            self.phase, self.total, self.changed, self.unchanged, self.skipped
        );
        for report in &self.reports {
            out.push_str(&report.to_string());
            out.push('\n');
        }
        out
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
