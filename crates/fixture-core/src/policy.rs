//! Configurable behaviour for the shape transformations.
//!
//! The fixture forms this crate grew out of disagreed on a few details: what
//! an "empty" number looks like, whether an empty list survives pruning, and
//! whether the strings `"null"`/`"None"` count as missing. Rather than pick
//! one silently, each choice is a field here.

use serde::{Deserialize, Serialize};

/// What [`crate::empty_like`] puts in place of numbers and booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyScalars {
    /// Numbers and booleans become `null`.
    #[default]
    Null,
    /// Numbers become `0` and booleans become `false`.
    Zero,
}

impl std::str::FromStr for EmptyScalars {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(EmptyScalars::Null),
            "zero" => Ok(EmptyScalars::Zero),
            other => Err(format!(
                "unknown scalar policy '{}' (expected 'null' or 'zero')",
                other
            )),
        }
    }
}

/// Rules for [`crate::prune_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrunePolicy {
    /// Keep mapping entries whose value is (or prunes down to) `[]`.
    /// List items that are empty lists are dropped either way.
    pub keep_empty_lists: bool,
    /// Strings treated like `null` and dropped, e.g. `"null"` or `"None"`.
    pub null_like_strings: Vec<String>,
}

impl PrunePolicy {
    /// Keeps explicit empty lists and treats only real `null` / `""` as empty.
    pub fn lenient() -> Self {
        Self {
            keep_empty_lists: true,
            null_like_strings: Vec::new(),
        }
    }

    /// Drops empty lists too, and treats `"null"` and `"None"` as missing.
    pub fn strict() -> Self {
        Self {
            keep_empty_lists: false,
            null_like_strings: vec!["null".to_string(), "None".to_string()],
        }
    }

    /// Look up a named preset (`"lenient"` or `"strict"`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "lenient" => Some(Self::lenient()),
            "strict" => Some(Self::strict()),
            _ => None,
        }
    }

    pub(crate) fn is_null_like(&self, s: &str) -> bool {
        self.null_like_strings.iter().any(|n| n == s)
    }
}

impl Default for PrunePolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Default separator for flattened key paths.
pub const DEFAULT_SEPARATOR: &str = ".";

/// All tunables in one place, as loaded from a config file.
///
/// Every field has a default, so a partial document deserializes fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub separator: String,
    pub empty_scalars: EmptyScalars,
    pub prune: PrunePolicy,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            empty_scalars: EmptyScalars::default(),
            prune: PrunePolicy::default(),
        }
    }
}
