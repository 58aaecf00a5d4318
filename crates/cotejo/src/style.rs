//! Style attribute records captured per tracked element.
//!
//! Values are kept exactly as the browser reports them (computed color
//! strings, CSS shorthand text). Two records are compared attribute by
//! attribute with exact string equality: `"rgb(0,0,0)"` and `"rgb(0, 0, 0)"`
//! are different values.

use crate::result::CotejoError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A monitored computed-style property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    /// `background-color`
    BackgroundColor,
    /// `text-decoration`
    TextDecoration,
    /// `box-shadow`
    BoxShadow,
    /// `border-bottom`
    BorderBottom,
}

impl StyleKey {
    /// Every monitored key, in report order
    pub const ALL: [Self; 4] = [
        Self::BackgroundColor,
        Self::TextDecoration,
        Self::BoxShadow,
        Self::BorderBottom,
    ];

    /// Name as exposed by `CSSStyleDeclaration` (camelCase)
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::TextDecoration => "textDecoration",
            Self::BoxShadow => "boxShadow",
            Self::BorderBottom => "borderBottom",
        }
    }

    /// CSS property name (kebab-case)
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::TextDecoration => "text-decoration",
            Self::BoxShadow => "box-shadow",
            Self::BorderBottom => "border-bottom",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

impl FromStr for StyleKey {
    type Err = CotejoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.dom_name() == s || key.css_name() == s)
            .ok_or_else(|| CotejoError::config(format!("unknown style key '{s}'")))
    }
}

/// One element's monitored styles at one capture
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    /// Computed `background-color`
    pub background_color: String,
    /// Computed `text-decoration`
    pub text_decoration: String,
    /// Computed `box-shadow`
    pub box_shadow: String,
    /// Computed `border-bottom`
    pub border_bottom: String,
    /// Element tag name as reported by the DOM (e.g. `A`)
    #[serde(default)]
    pub tag_name: String,
    /// Identifying text (the element's `innerText`)
    #[serde(default, alias = "innerText")]
    pub label: String,
    /// Structural path of the element in the document, when the driver knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom_path: Option<String>,
}

impl StyleAttributes {
    /// Create a record for an element with every style set to `none`
    #[must_use]
    pub fn new(tag_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            background_color: String::from("none"),
            text_decoration: String::from("none"),
            box_shadow: String::from("none"),
            border_bottom: String::from("none"),
            tag_name: tag_name.into(),
            label: label.into(),
            dom_path: None,
        }
    }

    /// Set a monitored style value
    #[must_use]
    pub fn with_style(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = value.into();
        self
    }

    /// Set the DOM path used for identity correlation
    #[must_use]
    pub fn with_dom_path(mut self, path: impl Into<String>) -> Self {
        self.dom_path = Some(path.into());
        self
    }

    /// Value of a monitored style
    #[must_use]
    pub fn get(&self, key: StyleKey) -> &str {
        match key {
            StyleKey::BackgroundColor => &self.background_color,
            StyleKey::TextDecoration => &self.text_decoration,
            StyleKey::BoxShadow => &self.box_shadow,
            StyleKey::BorderBottom => &self.border_bottom,
        }
    }

    fn slot_mut(&mut self, key: StyleKey) -> &mut String {
        match key {
            StyleKey::BackgroundColor => &mut self.background_color,
            StyleKey::TextDecoration => &mut self.text_decoration,
            StyleKey::BoxShadow => &mut self.box_shadow,
            StyleKey::BorderBottom => &mut self.border_bottom,
        }
    }

    /// Every monitored key whose value differs from `later`, in `keys` order
    #[must_use]
    pub fn diff(&self, later: &Self, keys: &[StyleKey]) -> Vec<AttributeChange> {
        keys.iter()
            .filter(|key| self.get(**key) != later.get(**key))
            .map(|key| AttributeChange {
                key: *key,
                before: self.get(*key).to_string(),
                after: later.get(*key).to_string(),
            })
            .collect()
    }

    /// Trimmed label cut to `max_chars` characters, or `fallback` when empty
    #[must_use]
    pub fn display_label(&self, max_chars: usize, fallback: &str) -> String {
        let trimmed = self.label.trim();
        if trimmed.is_empty() {
            return fallback.to_string();
        }
        trimmed.chars().take(max_chars).collect()
    }

    /// Tag name, or `fallback` when the driver reported none
    #[must_use]
    pub fn display_tag<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.tag_name.is_empty() {
            fallback
        } else {
            &self.tag_name
        }
    }

    /// Stable identity of this element across captures
    ///
    /// A DOM path, when the driver reports one, is the whole identity: the
    /// rendered text can change with the toggle (`text-transform`). Without a
    /// path the key falls back to tag and trimmed text.
    #[must_use]
    pub fn element_key(&self) -> ElementKey {
        match self.dom_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => ElementKey::derive(&["path", path]),
            _ => ElementKey::derive(&["text", &self.tag_name, self.label.trim()]),
        }
    }
}

/// One attribute that differs between two captures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeChange {
    /// Style that changed
    pub key: StyleKey,
    /// Value in the earlier capture
    pub before: String,
    /// Value in the later capture
    pub after: String,
}

impl fmt::Display for AttributeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" → \"{}\"", self.key, self.before, self.after)
    }
}

/// Content hash identifying a tracked element independent of its position
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey(String);

impl ElementKey {
    /// Hash `parts`, NUL-separated, into a key
    #[must_use]
    pub fn derive(parts: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                hasher.update([0]);
            }
            hasher.update(part.as_bytes());
        }
        let hex = format!("{:x}", hasher.finalize());
        Self(hex[..32].to_string())
    }

    /// Hex form of the key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
