//! Style snapshot comparison across a toggle lifecycle.
//!
//! The comparator stores one [`ElementSnapshot`] per [`Phase`] and diffs any
//! later phase against baseline. Baseline records are matched to later
//! records by capture position (default) or by element identity.
//! Elements without a later record are reported as `no-data` and never
//! counted as passes or failures.
//!
//! ```ignore
//! let mut comparator = StyleSnapshotComparator::new();
//! comparator.record_snapshot(Phase::Baseline, driver.capture_attributes()?);
//! driver.set_toggle(true)?;
//! comparator.record_snapshot(Phase::Toggled, driver.capture_attributes()?);
//! comparator.assert_all_changed(Phase::Toggled)?;
//! ```

use crate::config::{ComparatorConfig, Correlation};
use crate::report::{ComparisonReport, Expectation, MissingReason, PhaseSummary, ViolationReport};
use crate::result::{CotejoError, CotejoResult};
use crate::snapshot::{ElementSnapshot, Phase, SnapshotStore};
use crate::style::{ElementKey, StyleAttributes};
use std::collections::HashMap;

/// Compares style snapshots of tracked elements against baseline
#[derive(Debug, Clone, Default)]
pub struct StyleSnapshotComparator {
    config: ComparatorConfig,
    store: SnapshotStore,
}

impl StyleSnapshotComparator {
    /// Create a comparator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparator with a validated configuration
    pub fn with_config(config: ComparatorConfig) -> CotejoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: SnapshotStore::new(),
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Store the records captured at `phase`, verbatim
    pub fn record_snapshot(
        &mut self,
        phase: Phase,
        elements: Vec<StyleAttributes>,
    ) -> &ElementSnapshot {
        tracing::debug!(%phase, elements = elements.len(), "recording style snapshot");
        self.store.record(ElementSnapshot::new(phase, elements))
    }

    /// Snapshot recorded for `phase`
    #[must_use]
    pub fn snapshot(&self, phase: Phase) -> Option<&ElementSnapshot> {
        self.store.get(phase)
    }

    /// Discard every snapshot of the current run
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Compare every baseline element with its record at `phase`
    ///
    /// Fails only when baseline or `phase` was never recorded.
    pub fn compare_to_baseline(&self, phase: Phase) -> CotejoResult<Vec<ComparisonReport>> {
        let baseline = self.store.require(Phase::Baseline)?;
        let later = self.store.require(phase)?;
        let matches = self.correlate(baseline, later);

        let reports = baseline
            .iter()
            .zip(matches)
            .enumerate()
            .map(|(index, (before, matched))| match matched {
                Ok(position) => {
                    let after = &later.elements[position];
                    ComparisonReport::compared(
                        index,
                        position,
                        after.display_tag(&self.config.fallback_tag),
                        self.label_of(after),
                        before.diff(after, &self.config.monitored),
                    )
                }
                Err(reason) => {
                    tracing::warn!(
                        %phase,
                        index,
                        %reason,
                        "no {phase} style for element {index}, skipping"
                    );
                    ComparisonReport::no_data(
                        index,
                        before.display_tag(&self.config.fallback_tag),
                        self.label_of(before),
                        reason,
                    )
                }
            })
            .collect();
        Ok(reports)
    }

    /// Tally the comparison of `phase` against baseline without asserting
    pub fn summarize(&self, phase: Phase) -> CotejoResult<PhaseSummary> {
        Ok(PhaseSummary::new(
            phase,
            None,
            self.compare_to_baseline(phase)?,
        ))
    }

    /// Fail unless every element with data at `phase` differs from baseline
    pub fn assert_all_changed(&self, phase: Phase) -> CotejoResult<PhaseSummary> {
        self.assert_expectation(phase, Expectation::Changed)
    }

    /// Fail if any element with data at `phase` differs from baseline
    pub fn assert_all_reverted(&self, phase: Phase) -> CotejoResult<PhaseSummary> {
        self.assert_expectation(phase, Expectation::Reverted)
    }

    fn assert_expectation(
        &self,
        phase: Phase,
        expectation: Expectation,
    ) -> CotejoResult<PhaseSummary> {
        let reports = self.compare_to_baseline(phase)?;
        for report in reports.iter().filter(|r| !r.is_no_data()) {
            if expectation.is_violated_by(report) {
                tracing::error!(%phase, index = report.index, "{report}");
            } else {
                tracing::info!(%phase, index = report.index, "{report}");
            }
        }

        let summary = PhaseSummary::new(phase, Some(expectation), reports);
        let violations = summary.violations(expectation);
        if violations.is_empty() {
            tracing::info!(
                %phase,
                %expectation,
                judged = summary.judged(),
                skipped = summary.skipped,
                "style expectation held"
            );
            return Ok(summary);
        }

        Err(CotejoError::StyleAssertion {
            report: ViolationReport {
                phase,
                expectation,
                judged: summary.judged(),
                skipped: summary.skipped,
                violations,
            },
        })
    }

    fn label_of(&self, attrs: &StyleAttributes) -> String {
        attrs.display_label(self.config.label_max_chars, &self.config.fallback_label)
    }

    /// Position in `later` for each baseline element
    fn correlate(
        &self,
        baseline: &ElementSnapshot,
        later: &ElementSnapshot,
    ) -> Vec<Result<usize, MissingReason>> {
        match self.config.correlation {
            Correlation::Positional => (0..baseline.len())
                .map(|index| {
                    if index < later.len() {
                        Ok(index)
                    } else {
                        Err(MissingReason::BeyondCapture)
                    }
                })
                .collect(),
            Correlation::Identity => {
                let positions = later.key_index();
                let mut seen: HashMap<ElementKey, usize> = HashMap::new();
                baseline
                    .iter()
                    .map(|attrs| {
                        let key = attrs.element_key();
                        let occurrence = seen.entry(key.clone()).or_insert(0);
                        let found = positions
                            .get(&key)
                            .and_then(|group| group.get(*occurrence))
                            .copied();
                        *occurrence += 1;
                        found.ok_or(MissingReason::IdentityNotFound)
                    })
                    .collect()
            }
        }
    }
}
