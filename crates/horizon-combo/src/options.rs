//! Option lists and the option-list reconciler.
//!
//! The combo box draws its entries from two sources: host-supplied base
//! options (read-only) and user-added options (prepended on commit). The
//! reconciler merges them with the current value into the list the select
//! control displays:
//!
//! ```text
//! [""] ++ [value, if new] ++ (added - base) ++ base
//! ```
//!
//! The blank sentinel is always first and no entry appears twice.
//!
//! # Example
//!
//! ```
//! use horizon_combo::options::{reconcile, OptionList};
//!
//! let base = OptionList::from(["red", "green"]);
//! let added = OptionList::new();
//!
//! let result = reconcile(&base.snapshot(), &added.snapshot(), "blue");
//! assert_eq!(result.options, vec!["", "blue", "red", "green"]);
//! assert!(result.has_options);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use horizon_combo_core::logging::targets;
use parking_lot::RwLock;
use serde_json::Value;

/// The blank entry that always heads the displayed list.
pub const SENTINEL: &str = "";

// ============================================================================
// OptionList
// ============================================================================

/// A shared, ordered list of option strings.
///
/// Cloning an `OptionList` clones the handle, not the contents: every clone
/// observes the same entries. This is how added options stay visible to the
/// host while the widget prepends to them.
#[derive(Clone, Default)]
pub struct OptionList {
    items: Arc<RwLock<Vec<String>>>,
}

impl OptionList {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding the given items.
    pub fn from_vec(items: Vec<String>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Build a list from a loosely typed host value.
    ///
    /// Anything other than an array yields `None`, which callers treat as
    /// an absent list. Non-string elements are skipped.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Array(entries) = value else {
            tracing::debug!(target: targets::OPTIONS, kind = json_kind(value), "option list value is not an array; treating as absent");
            return None;
        };

        let items = entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s.clone()),
                other => {
                    tracing::debug!(target: targets::OPTIONS, kind = json_kind(other), "skipping non-string option entry");
                    None
                }
            })
            .collect();
        Some(Self::from_vec(items))
    }

    /// Copy the current entries out of the list.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.read().clone()
    }

    /// Access the entries through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[String]) -> R,
    {
        f(&self.items.read())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Check if the list contains `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.items.read().iter().any(|item| item == value)
    }

    /// Insert a value at the front of the list.
    pub fn prepend(&self, value: impl Into<String>) {
        self.items.write().insert(0, value.into());
    }

    /// Append a value at the back of the list.
    pub fn push(&self, value: impl Into<String>) {
        self.items.write().push(value.into());
    }

    /// Replace the contents of the list in place, keeping the handle.
    pub fn set_items(&self, items: Vec<String>) {
        *self.items.write() = items;
    }

    /// Check whether two handles refer to the same underlying list.
    pub fn ptr_eq(&self, other: &OptionList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl fmt::Debug for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.read().iter()).finish()
    }
}

impl From<Vec<String>> for OptionList {
    fn from(items: Vec<String>) -> Self {
        Self::from_vec(items)
    }
}

impl From<Vec<&str>> for OptionList {
    fn from(items: Vec<&str>) -> Self {
        Self::from_vec(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionList {
    fn from(items: [&str; N]) -> Self {
        Self::from_vec(items.into_iter().map(String::from).collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Reconciler
// ============================================================================

/// The result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// The entries the select control displays, sentinel first.
    pub options: Vec<String>,
    /// Whether the "options available" placeholder applies.
    ///
    /// True when the merged base and added options are non-empty, or when
    /// the current value is non-empty.
    pub has_options: bool,
}

/// Merge base options, added options, and the current value.
///
/// Added options already present in `base` are dropped from the added
/// contribution. Empty strings in either list are dropped in favor of the
/// leading sentinel, and repeated entries keep only their first position.
pub fn reconcile(base: &[String], added: &[String], value: &str) -> Reconciled {
    let base_set: HashSet<&str> = base.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(SENTINEL);

    let mut merged: Vec<&str> = Vec::with_capacity(added.len() + base.len());
    let added_unique = added.iter().map(String::as_str).filter(|v| !base_set.contains(v));
    for entry in added_unique.chain(base.iter().map(String::as_str)) {
        if seen.insert(entry) {
            merged.push(entry);
        }
    }

    let has_options = !merged.is_empty() || !value.is_empty();

    let mut options = Vec::with_capacity(merged.len() + 2);
    options.push(SENTINEL.to_string());
    if !value.is_empty() && !seen.contains(value) {
        options.push(value.to_string());
    }
    options.extend(merged.into_iter().map(String::from));

    Reconciled {
        options,
        has_options,
    }
}

/// Commit `value` as a user-added option.
///
/// Prepends `value` to `added` when it is non-empty and present in neither
/// list. Returns `true` if `added` changed.
pub fn commit_option(base: &[String], added: &OptionList, value: &str) -> bool {
    if value.is_empty() || base.iter().any(|b| b == value) || added.contains(value) {
        tracing::debug!(target: targets::OPTIONS, value, "commit did not change added options");
        return false;
    }
    tracing::debug!(target: targets::OPTIONS, value, "adding user option");
    added.prepend(value);
    true
}

// ============================================================================
// Placeholders
// ============================================================================

/// The two placeholder texts shown in the text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    /// Shown when options are available.
    pub options: Option<String>,
    /// Shown when no options are available.
    pub optionless: Option<String>,
}

impl Placeholders {
    /// Pick the placeholder for a reconciliation result. Missing texts are empty.
    pub fn select(&self, has_options: bool) -> &str {
        let text = if has_options {
            &self.options
        } else {
            &self.optionless
        };
        text.as_deref().unwrap_or("")
    }
}
