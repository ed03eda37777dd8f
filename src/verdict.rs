//! Verdict table - maps the six strength levels to styled fragments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::html::{tag, encode, Attributes};

/// Strength classification assigned to a password as typed.
///
/// The declaration order is the strength order; `TooShort` is the resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VerdictLevel {
    TooShort,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl VerdictLevel {
    pub const ALL: [VerdictLevel; 6] = [
        VerdictLevel::TooShort,
        VerdictLevel::VeryWeak,
        VerdictLevel::Weak,
        VerdictLevel::Good,
        VerdictLevel::Strong,
        VerdictLevel::VeryStrong,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            VerdictLevel::TooShort => "Too Short",
            VerdictLevel::VeryWeak => "Very Weak",
            VerdictLevel::Weak => "Weak",
            VerdictLevel::Good => "Good",
            VerdictLevel::Strong => "Strong",
            VerdictLevel::VeryStrong => "Very Strong",
        }
    }

    fn default_class(self) -> &'static str {
        match self {
            VerdictLevel::TooShort => "label label-default",
            VerdictLevel::VeryWeak => "label label-danger",
            VerdictLevel::Weak => "label label-warning",
            VerdictLevel::Good => "label label-info",
            VerdictLevel::Strong => "label label-primary",
            VerdictLevel::VeryStrong => "label label-success",
        }
    }
}

impl fmt::Display for VerdictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One configured verdict: a level and the CSS class used to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictEntry {
    pub level: VerdictLevel,
    pub class: String,
}

impl VerdictEntry {
    pub fn new(level: VerdictLevel, class: impl Into<String>) -> Self {
        Self {
            level,
            class: class.into(),
        }
    }
}

/// The default verdict classes, one per level in ascending order.
pub fn default_verdicts() -> Vec<VerdictEntry> {
    VerdictLevel::ALL
        .iter()
        .map(|&level| VerdictEntry::new(level, level.default_class()))
        .collect()
}

/// Validated verdict table holding one styled fragment per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    styled: Vec<String>,
}

impl VerdictTable {
    /// Builds the table from configured entries, in any order.
    ///
    /// # Errors
    /// - `VerdictCount` unless exactly six entries are given
    /// - `DuplicateVerdict` if a level appears twice
    ///
    /// Six entries with no repeated level cover every level, so no level can
    /// be missing once both checks pass.
    pub fn new(entries: &[VerdictEntry]) -> Result<Self, ConfigurationError> {
        if entries.len() != VerdictLevel::ALL.len() {
            return Err(ConfigurationError::VerdictCount(entries.len()));
        }

        let mut sorted: Vec<&VerdictEntry> = entries.iter().collect();
        sorted.sort_by_key(|entry| entry.level);
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].level == pair[1].level) {
            return Err(ConfigurationError::DuplicateVerdict(pair[1].level));
        }

        let styled = sorted
            .into_iter()
            .map(|entry| style(&entry.class, entry.level))
            .collect();
        Ok(Self { styled })
    }

    /// Styled fragments in ascending level order.
    pub fn styled(&self) -> &[String] {
        &self.styled
    }

    pub fn fragment(&self, level: VerdictLevel) -> &str {
        &self.styled[level.index()]
    }

    /// The fragment shown before any client-side interaction.
    pub fn resting(&self) -> &str {
        self.fragment(VerdictLevel::TooShort)
    }
}

fn style(class: &str, level: VerdictLevel) -> String {
    tag("div", &encode(level.label()), &Attributes::from([("class", class)]))
}
