//! Comparator configuration.

use crate::result::{CotejoError, CotejoResult};
use crate::style::StyleKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of label characters shown in diagnostics
pub const DEFAULT_LABEL_MAX_CHARS: usize = 50;

/// How records of a later phase are matched to baseline records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    /// Match by capture position
    #[default]
    Positional,
    /// Match by content hash of the DOM path, or of tag and text without one
    Identity,
}

/// Configuration for [`StyleSnapshotComparator`](crate::StyleSnapshotComparator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Record matching strategy
    pub correlation: Correlation,
    /// Styles compared between phases
    pub monitored: Vec<StyleKey>,
    /// Label characters kept in diagnostics
    pub label_max_chars: usize,
    /// Label shown for elements without text
    pub fallback_label: String,
    /// Tag shown for elements without a tag name
    pub fallback_tag: String,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            correlation: Correlation::Positional,
            monitored: StyleKey::ALL.to_vec(),
            label_max_chars: DEFAULT_LABEL_MAX_CHARS,
            fallback_label: String::from("NO TEXT"),
            fallback_tag: String::from("UNKNOWN"),
        }
    }
}

impl ComparatorConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set correlation strategy
    #[must_use]
    pub const fn with_correlation(mut self, correlation: Correlation) -> Self {
        self.correlation = correlation;
        self
    }

    /// Set monitored styles
    #[must_use]
    pub fn with_monitored(mut self, keys: impl IntoIterator<Item = StyleKey>) -> Self {
        self.monitored = keys.into_iter().collect();
        self
    }

    /// Set label truncation
    #[must_use]
    pub const fn with_label_max_chars(mut self, max: usize) -> Self {
        self.label_max_chars = max;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> CotejoResult<()> {
        if self.monitored.is_empty() {
            return Err(CotejoError::config("at least one style key must be monitored"));
        }
        let mut seen = self.monitored.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != self.monitored.len() {
            return Err(CotejoError::config("monitored style keys must be unique"));
        }
        if self.label_max_chars == 0 {
            return Err(CotejoError::config("label_max_chars must be positive"));
        }
        Ok(())
    }

    /// Parse YAML configuration
    pub fn from_yaml_str(yaml: &str) -> CotejoResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON configuration
    pub fn from_json_str(json: &str) -> CotejoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> CotejoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            other => Err(CotejoError::config(format!(
                "unsupported config format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}
