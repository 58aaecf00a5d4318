//! Collect-all checklists for page verifiers.
//!
//! A page verifier walks every article, card or field and records each
//! mismatch, then fails once with all of them. Failure messages are built
//! lazily so passing checks cost nothing beyond the comparison.

use crate::result::{CotejoError, CotejoResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// One check that did not hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCheck {
    /// 1-based position among the checks of the list
    pub position: usize,
    /// What went wrong
    pub message: String,
}

/// Counts of a finished checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChecklistSummary {
    /// Checks evaluated
    pub total: usize,
    /// Checks that did not hold
    pub failed: usize,
}

impl ChecklistSummary {
    /// Checks that held
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.total - self.failed
    }
}

/// Accumulates checks about one page state
#[derive(Debug, Default)]
pub struct Checklist {
    subject: String,
    total: usize,
    failures: Vec<FailedCheck>,
}

impl Checklist {
    /// Start a checklist about `subject` (e.g. "careers default filters")
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Record `holds`; `describe` runs only when it does not
    pub fn check(&mut self, holds: bool, describe: impl FnOnce() -> String) {
        self.total += 1;
        if !holds {
            self.push(describe());
        }
    }

    /// Record that `actual` equals `expected`
    pub fn check_eq<T: PartialEq + Debug>(&mut self, actual: T, expected: T, what: impl Display) {
        let holds = actual == expected;
        self.check(holds, || format!("{what}: expected {expected:?}, got {actual:?}"));
    }

    /// Record that `items` has at least one entry
    pub fn check_not_empty<T>(&mut self, items: &[T], what: impl Display) {
        self.check(!items.is_empty(), || format!("{what}: none found"));
    }

    /// Record an unconditional failure
    pub fn fail(&mut self, message: impl Into<String>) {
        self.check(false, || message.into());
    }

    fn push(&mut self, message: String) {
        tracing::error!(subject = %self.subject, "{message}");
        self.failures.push(FailedCheck {
            position: self.total,
            message,
        });
    }

    /// Failures so far
    #[must_use]
    pub fn failures(&self) -> &[FailedCheck] {
        &self.failures
    }

    /// Whether every check so far held
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Summary, or one error listing every failure
    pub fn finish(self) -> CotejoResult<ChecklistSummary> {
        let summary = ChecklistSummary {
            total: self.total,
            failed: self.failures.len(),
        };
        if self.failures.is_empty() {
            tracing::debug!(subject = %self.subject, checks = summary.total, "checklist passed");
            return Ok(summary);
        }

        let lines: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("  #{}: {}", f.position, f.message))
            .collect();
        Err(CotejoError::assertion(format!(
            "{}: {} of {} check(s) failed\n{}",
            self.subject,
            summary.failed,
            summary.total,
            lines.join("\n")
        )))
    }
}
