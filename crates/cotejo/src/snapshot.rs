//! Style snapshots keyed by capture phase.

use crate::result::{CotejoError, CotejoResult};
use crate::style::{ElementKey, StyleAttributes};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Capture point in a toggle lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before the toggle is switched on
    Baseline,
    /// After the toggle is switched on
    Toggled,
    /// After the toggle is switched back off
    Reverted,
}

impl Phase {
    /// All phases in lifecycle order
    pub const ALL: [Self; 3] = [Self::Baseline, Self::Toggled, Self::Reverted];

    /// Lowercase tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Toggled => "toggled",
            Self::Reverted => "reverted",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CotejoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CotejoError::config(format!("unknown phase '{s}'")))
    }
}

/// Ordered style records for every tracked element at one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// Phase this snapshot was captured at
    pub phase: Phase,
    /// One record per tracked element, in capture order
    pub elements: Vec<StyleAttributes>,
}

impl ElementSnapshot {
    /// Create a snapshot
    #[must_use]
    pub fn new(phase: Phase, elements: Vec<StyleAttributes>) -> Self {
        Self { phase, elements }
    }

    /// Number of captured elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Record at a capture position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StyleAttributes> {
        self.elements.get(index)
    }

    /// Iterate records in capture order
    pub fn iter(&self) -> impl Iterator<Item = &StyleAttributes> {
        self.elements.iter()
    }

    /// Capture positions grouped by element identity, each group in capture order
    #[must_use]
    pub fn key_index(&self) -> HashMap<ElementKey, Vec<usize>> {
        let mut index: HashMap<ElementKey, Vec<usize>> = HashMap::new();
        for (position, attrs) in self.elements.iter().enumerate() {
            index.entry(attrs.element_key()).or_default().push(position);
        }
        index
    }
}

/// In-memory snapshots for the current run
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: BTreeMap<Phase, ElementSnapshot>,
}

impl SnapshotStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any earlier capture of the same phase
    pub fn record(&mut self, snapshot: ElementSnapshot) -> &ElementSnapshot {
        let phase = snapshot.phase;
        if self.snapshots.insert(phase, snapshot).is_some() {
            tracing::debug!(%phase, "replaced previously recorded snapshot");
        }
        &self.snapshots[&phase]
    }

    /// Snapshot for a phase, if recorded
    #[must_use]
    pub fn get(&self, phase: Phase) -> Option<&ElementSnapshot> {
        self.snapshots.get(&phase)
    }

    /// Snapshot for a phase, failing when it was never recorded
    pub fn require(&self, phase: Phase) -> CotejoResult<&ElementSnapshot> {
        self.get(phase)
            .ok_or(CotejoError::PhaseNotRecorded { phase })
    }

    /// Recorded phases in lifecycle order
    #[must_use]
    pub fn phases(&self) -> Vec<Phase> {
        self.snapshots.keys().copied().collect()
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
