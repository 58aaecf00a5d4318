//! Accessibility widget: default toggle states and the highlight-links toggle.

use crate::checklist::{Checklist, ChecklistSummary};
use crate::capture::ToggleDriver;
use crate::comparator::StyleSnapshotComparator;
use crate::config::ComparatorConfig;
use crate::page_object::{PageObject, Selector};
use crate::report::PhaseSummary;
use crate::result::CotejoResult;
use crate::snapshot::Phase;
use serde::{Deserialize, Serialize};

/// Elements whose styles the highlight-links toggle should affect
pub const TRACKED_ELEMENTS: &str = "a, button";

/// Body class present while highlight-links is active
pub const HIGHLIGHT_LINKS_BODY_CLASS: &str = "acwp-underline";

/// Toggles offered by the accessibility toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetToggle {
    /// Keyboard navigation
    Keyboard,
    /// Disable animations
    Animations,
    /// High contrast
    Contrast,
    /// Increase font
    IncreaseFont,
    /// Decrease font
    DecreaseFont,
    /// Readable font
    Readable,
    /// Mark titles
    MarkTitles,
    /// Highlight links
    Underline,
}

impl WidgetToggle {
    /// Every toggle in toolbar order
    pub const ALL: [Self; 8] = [
        Self::Keyboard,
        Self::Animations,
        Self::Contrast,
        Self::IncreaseFont,
        Self::DecreaseFont,
        Self::Readable,
        Self::MarkTitles,
        Self::Underline,
    ];

    /// Checkbox element id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Keyboard => "acwp-toggler-keyboard",
            Self::Animations => "acwp-toggler-animations",
            Self::Contrast => "acwp-toggler-contrast",
            Self::IncreaseFont => "acwp-toggler-incfont",
            Self::DecreaseFont => "acwp-toggler-decfont",
            Self::Readable => "acwp-toggler-readable",
            Self::MarkTitles => "acwp-toggler-marktitles",
            Self::Underline => "acwp-toggler-underline",
        }
    }

    /// Checkbox selector
    #[must_use]
    pub fn checkbox(self) -> Selector {
        Selector::css(format!("#{}", self.id()))
    }

    /// Clickable label selector
    #[must_use]
    pub fn label(self) -> Selector {
        Selector::css(format!("label[for=\"{}\"]", self.id()))
    }
}

/// State of one toolbar toggle as read by the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    /// Checkbox id
    pub id: String,
    /// Whether the checkbox is checked
    pub checked: bool,
    /// Whether its label is visible
    pub label_visible: bool,
    /// Whether its label is enabled
    pub label_enabled: bool,
}

/// The accessibility toolbar page object
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityWidget;

impl PageObject for AccessibilityWidget {
    fn url_pattern(&self) -> &str {
        "/"
    }

    fn selectors(&self) -> Vec<(&'static str, Selector)> {
        vec![
            ("toolbar_button", Selector::css("#acwp-toolbar-btn")),
            ("toolbar_module", Selector::css("#acwp-toolbar-module")),
            ("highlight_links_label", WidgetToggle::Underline.label()),
            ("tracked_elements", Selector::css(TRACKED_ELEMENTS)),
        ]
    }

    fn page_name(&self) -> &str {
        "accessibility widget"
    }
}

impl AccessibilityWidget {
    /// Every toggle must exist, be unchecked, and have a visible enabled label
    pub fn verify_default_toggle_states(
        &self,
        states: &[ToggleState],
    ) -> CotejoResult<ChecklistSummary> {
        let mut list = Checklist::new("default toggle states");
        for toggle in WidgetToggle::ALL {
            let Some(state) = states.iter().find(|s| s.id == toggle.id()) else {
                list.fail(format!("toggle #{} not found", toggle.id()));
                continue;
            };
            list.check(
                !state.checked,
                || format!("toggle #{} should not be checked by default", state.id),
            );
            list.check(
                state.label_visible,
                || format!("label for #{} should be visible", state.id),
            );
            list.check(
                state.label_enabled,
                || format!("label for #{} should be enabled", state.id),
            );
        }
        list.finish()
    }
}

/// Both phase summaries of a passing highlight-links check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightLinksOutcome {
    /// Toggled phase: every element changed
    pub changed: PhaseSummary,
    /// Reverted phase: every element restored
    pub restored: PhaseSummary,
}

/// Highlight-links toggle lifecycle over a [`ToggleDriver`]
#[derive(Debug, Clone, Default)]
pub struct HighlightLinksCheck {
    comparator: StyleSnapshotComparator,
}

impl HighlightLinksCheck {
    /// Create a check with default comparator settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a check with a custom comparator configuration
    pub fn with_config(config: ComparatorConfig) -> CotejoResult<Self> {
        Ok(Self {
            comparator: StyleSnapshotComparator::with_config(config)?,
        })
    }

    /// Snapshots captured so far
    #[must_use]
    pub const fn comparator(&self) -> &StyleSnapshotComparator {
        &self.comparator
    }

    /// Capture baseline, switch highlight-links on, capture toggled styles
    pub fn toggle_on<D: ToggleDriver>(&mut self, driver: &mut D) -> CotejoResult<()> {
        let baseline = driver.capture_attributes()?;
        self.comparator.record_snapshot(Phase::Baseline, baseline);
        driver.set_toggle(true)?;
        let toggled = driver.capture_attributes()?;
        self.comparator.record_snapshot(Phase::Toggled, toggled);
        Ok(())
    }

    /// Switch highlight-links off and capture reverted styles
    pub fn toggle_off<D: ToggleDriver>(&mut self, driver: &mut D) -> CotejoResult<()> {
        driver.set_toggle(false)?;
        let reverted = driver.capture_attributes()?;
        self.comparator.record_snapshot(Phase::Reverted, reverted);
        Ok(())
    }

    /// Every tracked element must look different with the toggle on
    pub fn assert_styles_changed(&self) -> CotejoResult<PhaseSummary> {
        self.comparator.assert_all_changed(Phase::Toggled)
    }

    /// Every tracked element must look as it did before the toggle
    pub fn assert_styles_restored(&self) -> CotejoResult<PhaseSummary> {
        self.comparator.assert_all_reverted(Phase::Reverted)
    }

    /// Toggle on, assert changed, toggle off, assert restored
    pub fn run<D: ToggleDriver>(&mut self, driver: &mut D) -> CotejoResult<HighlightLinksOutcome> {
        self.toggle_on(driver)?;
        let changed = self.assert_styles_changed()?;
        self.toggle_off(driver)?;
        let restored = self.assert_styles_restored()?;
        Ok(HighlightLinksOutcome { changed, restored })
    }
}
