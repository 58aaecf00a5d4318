//! Capture collaborators.
//!
//! Cotejo never talks to a browser. A driver implements [`StyleCapture`]
//! (and [`ToggleDriver`] for lifecycle checks) on top of whatever automation
//! library it uses; [`COMPUTED_STYLE_SCRIPT`] is the per-element function it
//! should evaluate so records line up with [`StyleAttributes`].

use crate::comparator::StyleSnapshotComparator;
use crate::config::ComparatorConfig;
use crate::result::{CotejoError, CotejoResult};
use crate::snapshot::Phase;
use crate::style::StyleAttributes;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// Element function producing one style record, including a DOM path
pub const COMPUTED_STYLE_SCRIPT: &str = r"(node) => {
  const cs = window.getComputedStyle(node);
  const path = [];
  for (let el = node; el && el.nodeType === 1; el = el.parentElement) {
    let i = 1;
    for (let s = el.previousElementSibling; s; s = s.previousElementSibling) i++;
    path.unshift(`${el.tagName.toLowerCase()}:nth-child(${i})`);
  }
  return {
    backgroundColor: cs.backgroundColor,
    textDecoration: cs.textDecoration,
    boxShadow: cs.boxShadow,
    borderBottom: cs.borderBottom,
    tagName: node.tagName,
    innerText: node.innerText,
    domPath: path.join('>'),
  };
}";

/// Supplies style records for the tracked elements, in stable order
pub trait StyleCapture {
    /// Read the monitored styles of every tracked element
    ///
    /// All reads for the capture must have completed when this returns.
    fn capture_attributes(&mut self) -> CotejoResult<Vec<StyleAttributes>>;
}

/// A capture source that can also switch the toggle under test
pub trait ToggleDriver: StyleCapture {
    /// Switch the toggle and return once the page reflects the new state
    fn set_toggle(&mut self, on: bool) -> CotejoResult<()>;
}

/// Parse the JSON array a driver gets back from [`COMPUTED_STYLE_SCRIPT`]
pub fn parse_captured(json: &str) -> CotejoResult<Vec<StyleAttributes>> {
    Ok(serde_json::from_str(json)?)
}

/// Records of one toggle run, as saved by a driver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRun {
    /// Records before the toggle
    pub baseline: Vec<StyleAttributes>,
    /// Records with the toggle on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggled: Option<Vec<StyleAttributes>>,
    /// Records after switching the toggle off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverted: Option<Vec<StyleAttributes>>,
}

impl RecordedRun {
    /// Parse a JSON run document
    pub fn from_json_str(json: &str) -> CotejoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML run document
    pub fn from_yaml_str(yaml: &str) -> CotejoResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a run from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> CotejoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CotejoError::capture(format!(
                "unsupported run format for {}",
                path.display()
            ))),
        }
    }

    /// Records for a phase, if captured
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Option<&[StyleAttributes]> {
        match phase {
            Phase::Baseline => Some(&self.baseline),
            Phase::Toggled => self.toggled.as_deref(),
            Phase::Reverted => self.reverted.as_deref(),
        }
    }

    /// Build a comparator holding every captured phase
    pub fn into_comparator(self, config: ComparatorConfig) -> CotejoResult<StyleSnapshotComparator> {
        let mut comparator = StyleSnapshotComparator::with_config(config)?;
        comparator.record_snapshot(Phase::Baseline, self.baseline);
        if let Some(toggled) = self.toggled {
            comparator.record_snapshot(Phase::Toggled, toggled);
        }
        if let Some(reverted) = self.reverted {
            comparator.record_snapshot(Phase::Reverted, reverted);
        }
        Ok(comparator)
    }
}

/// In-memory driver that replays prepared captures in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedCapture {
    frames: VecDeque<Vec<StyleAttributes>>,
    toggle_on: bool,
    toggle_calls: Vec<bool>,
    fail_toggle: bool,
}

impl ScriptedCapture {
    /// Create a driver with no prepared captures
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a capture result
    #[must_use]
    pub fn then_capture(mut self, records: Vec<StyleAttributes>) -> Self {
        self.frames.push_back(records);
        self
    }

    /// Make every `set_toggle` call fail, as when the UI never settles
    #[must_use]
    pub const fn with_toggle_failure(mut self) -> Self {
        self.fail_toggle = true;
        self
    }

    /// Current toggle state
    #[must_use]
    pub const fn is_toggle_on(&self) -> bool {
        self.toggle_on
    }

    /// Every `set_toggle` argument, in call order
    #[must_use]
    pub fn toggle_calls(&self) -> &[bool] {
        &self.toggle_calls
    }

    /// Captures not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl StyleCapture for ScriptedCapture {
    fn capture_attributes(&mut self) -> CotejoResult<Vec<StyleAttributes>> {
        self.frames
            .pop_front()
            .ok_or_else(|| CotejoError::capture("no prepared capture left"))
    }
}

impl ToggleDriver for ScriptedCapture {
    fn set_toggle(&mut self, on: bool) -> CotejoResult<()> {
        self.toggle_calls.push(on);
        if self.fail_toggle {
            return Err(CotejoError::capture(format!(
                "toggle did not reach state {}",
                if on { "on" } else { "off" }
            )));
        }
        self.toggle_on = on;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::style::StyleKey;

    #[test]
    fn test_script_names_every_style_key() {
        for key in StyleKey::ALL {
            assert!(COMPUTED_STYLE_SCRIPT.contains(key.dom_name()));
        }
        assert!(COMPUTED_STYLE_SCRIPT.contains("domPath"));
    }

    #[test]
    fn test_parse_captured_with_dom_path() {
        let json = r#"[{
            "backgroundColor": "rgba(0, 0, 0, 0)",
            "textDecoration": "none solid rgb(0, 0, 0)",
            "boxShadow": "none",
            "borderBottom": "0px none rgb(0, 0, 0)",
            "tagName": "BUTTON",
            "innerText": "Book a demo",
            "domPath": "html:nth-child(1)>body:nth-child(2)>button:nth-child(1)"
        }]"#;
        let records = parse_captured(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag_name, "BUTTON");
        assert!(records[0].dom_path.as_deref().unwrap().ends_with("button:nth-child(1)"));
    }

    #[test]
    fn test_parse_captured_rejects_garbage() {
        assert!(matches!(
            parse_captured("{not json").unwrap_err(),
            CotejoError::Json(_)
        ));
    }

    mod recorded_run_tests {
        use super::*;

        const RUN_YAML: &str = "
baseline:
  - backgroundColor: rgb(0,0,0)
    textDecoration: none
    boxShadow: none
    borderBottom: none
    tagName: A
    label: Home
toggled:
  - backgroundColor: rgb(0,0,0)
    textDecoration: underline
    boxShadow: none
    borderBottom: none
    tagName: A
    label: Home
";

        #[test]
        fn test_yaml_run_into_comparator() {
            let run = RecordedRun::from_yaml_str(RUN_YAML).unwrap();
            assert!(run.phase(Phase::Reverted).is_none());
            let comparator = run.into_comparator(ComparatorConfig::default()).unwrap();
            assert!(comparator.assert_all_changed(Phase::Toggled).is_ok());
            assert!(comparator
                .assert_all_reverted(Phase::Reverted)
                .unwrap_err()
                .is_malformed_snapshot());
        }

        #[test]
        fn test_load_json_file() {
            let run = RecordedRun {
                baseline: vec![StyleAttributes::new("A", "Home")],
                toggled: None,
                reverted: Some(vec![StyleAttributes::new("A", "Home")]),
            };
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("run.json");
            std::fs::write(&path, serde_json::to_string(&run).unwrap()).unwrap();
            assert_eq!(RecordedRun::load(&path).unwrap(), run);
        }

        #[test]
        fn test_load_unknown_extension() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("run.txt");
            std::fs::write(&path, "").unwrap();
            assert!(RecordedRun::load(&path).is_err());
        }
    }

    mod scripted_capture_tests {
        use super::*;

        #[test]
        fn test_replays_in_order() {
            let mut driver = ScriptedCapture::new()
                .then_capture(vec![StyleAttributes::new("A", "one")])
                .then_capture(vec![]);
            assert_eq!(driver.remaining(), 2);
            assert_eq!(driver.capture_attributes().unwrap().len(), 1);
            assert!(driver.capture_attributes().unwrap().is_empty());
            assert!(driver.capture_attributes().is_err());
        }

        #[test]
        fn test_tracks_toggle_calls() {
            let mut driver = ScriptedCapture::new();
            driver.set_toggle(true).unwrap();
            assert!(driver.is_toggle_on());
            driver.set_toggle(false).unwrap();
            assert_eq!(driver.toggle_calls(), &[true, false]);
        }

        #[test]
        fn test_toggle_failure() {
            let mut driver = ScriptedCapture::new().with_toggle_failure();
            let err = driver.set_toggle(true).unwrap_err();
            assert!(err.to_string().contains("did not reach state on"));
            assert!(!driver.is_toggle_on());
        }
    }
}
