//! Models of the two native sub-controls and their render views.
//!
//! The combo box renders as two sibling controls sharing one value: a select
//! control listing the displayed options and a text field for free entry.
//! When more than one option is displayed, the text field carries the
//! [`SHORTER_INPUT_CLASS`] modifier so the select's dropdown arrow stays
//! reachable beside it.

use serde::Serialize;

/// Modifier class applied to the text field when the list has real entries.
pub const SHORTER_INPUT_CLASS: &str = "shorterInput";

// ============================================================================
// Select control
// ============================================================================

/// State of the native select control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<String>,
    selected_index: Option<usize>,
}

impl SelectControl {
    /// Create an empty select control.
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of displayed options.
    pub fn count(&self) -> usize {
        self.options.len()
    }

    /// Replace the displayed options. Returns `true` if they differ.
    ///
    /// The selection is kept if it still points at an option.
    pub fn set_options(&mut self, options: Vec<String>) -> bool {
        if self.options == options {
            return false;
        }
        self.options = options;
        if self.selected_index.is_some_and(|i| i >= self.options.len()) {
            self.selected_index = None;
        }
        true
    }

    /// The selected index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Select the option at `index`. Returns `false` if out of range.
    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected_index = Some(index);
            true
        } else {
            false
        }
    }

    /// Select the option equal to `value`, or clear the selection.
    pub fn select_value(&mut self, value: &str) {
        self.selected_index = self.options.iter().position(|o| o == value);
    }

    /// The value of the selected option, or empty when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected_index
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The index `shift` steps away from the selection, if an option exists there.
    ///
    /// With no selection the current index counts as -1, so a shift of +1
    /// lands on the first option.
    pub fn shifted_index(&self, shift: isize) -> Option<usize> {
        let current = self.selected_index.map_or(-1, |i| i as isize);
        let target = current + shift;
        usize::try_from(target)
            .ok()
            .filter(|&t| t < self.options.len())
    }
}

// ============================================================================
// Text field
// ============================================================================

/// State of the text field that is not shared with the select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    placeholder: String,
}

impl TextInput {
    /// Create a text field with no placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current placeholder.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder.
    pub fn set_placeholder(&mut self, text: &str) {
        if self.placeholder != text {
            self.placeholder = text.to_string();
        }
    }
}

// ============================================================================
// Render views
// ============================================================================

/// What the host renders for the select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    /// Option entries, sentinel first.
    pub options: Vec<String>,
    /// The selected entry.
    pub selected_index: Option<usize>,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the control has keyboard focus.
    pub focused: bool,
    /// Classes applied to the control.
    pub class: String,
}

/// What the host renders for the text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    /// The field's text.
    pub value: String,
    /// The placeholder text.
    pub placeholder: String,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the control has keyboard focus.
    pub focused: bool,
    /// Classes applied to the control.
    pub class: String,
}

/// A snapshot of both sub-controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboRender {
    /// The select control.
    pub select: SelectView,
    /// The text field.
    pub input: InputView,
}

/// Join the configured classes with the text field modifier, if it applies.
pub(crate) fn input_class(base: &str, shorter: bool) -> String {
    match (base.is_empty(), shorter) {
        (_, false) => base.to_string(),
        (true, true) => SHORTER_INPUT_CLASS.to_string(),
        (false, true) => format!("{base} {SHORTER_INPUT_CLASS}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_with(options: &[&str]) -> SelectControl {
        let mut select = SelectControl::new();
        select.set_options(options.iter().map(|s| s.to_string()).collect());
        select
    }

    #[test]
    fn test_select_value_tracks_selection() {
        let mut select = select_with(&["", "a", "b"]);
        assert_eq!(select.value(), "");
        assert_eq!(select.selected_index(), None);

        select.select_value("b");
        assert_eq!(select.selected_index(), Some(2));
        assert_eq!(select.value(), "b");

        select.select_value("missing");
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn test_shifted_index_bounds() {
        let mut select = select_with(&["", "a", "b"]);
        assert_eq!(select.shifted_index(1), Some(0));
        assert_eq!(select.shifted_index(-1), None);

        select.set_selected_index(2);
        assert_eq!(select.shifted_index(1), None);
        assert_eq!(select.shifted_index(-1), Some(1));
        assert_eq!(select.shifted_index(0), Some(2));
    }

    #[test]
    fn test_set_options_drops_stale_selection() {
        let mut select = select_with(&["", "a", "b"]);
        select.set_selected_index(2);
        assert!(!select.set_options(vec!["".into(), "a".into(), "b".into()]));
        assert_eq!(select.selected_index(), Some(2));

        assert!(select.set_options(vec!["".into()]));
        assert_eq!(select.selected_index(), None);
        assert!(!select.set_selected_index(1));
    }

    #[test]
    fn test_input_class() {
        assert_eq!(input_class("", false), "");
        assert_eq!(input_class("", true), "shorterInput");
        assert_eq!(input_class("form-control", true), "form-control shorterInput");
        assert_eq!(input_class("form-control", false), "form-control");
    }
}
