//! ComboBox widget: a select control and a text field sharing one value.
//!
//! The ComboBox lets the user pick from a list of options or type a new
//! value. Typed values are committed to a shared list of added options when
//! the text field loses focus, and from then on appear in the list.
//!
//! The widget is headless. The host forwards native events as
//! [`ComboEvent`]s, calls [`ComboBox::process_pending`] once the current
//! event turn is over, and renders [`ComboBox::render`] snapshots.
//!
//! # Options visibility
//!
//! Native select controls do not say whether their list is open. The widget
//! keeps a best-effort guess, toggled by clicks and Alt+arrow keys and
//! corrected by deferred tasks: a change event means the list closed, and a
//! blur always closes it.
//!
//! # Example
//!
//! ```
//! use horizon_combo::{ComboBox, ComboBoxConfig, ComboEvent, OptionList};
//!
//! let base = OptionList::from(["red", "green"]);
//! let added = OptionList::new();
//! let mut combo = ComboBox::with_config(
//!     ComboBoxConfig::new().with_options_placeholder("Pick or type a color"),
//! )
//! .with_options(base)
//! .with_added_options(added.clone());
//!
//! combo.value_changed().connect(|value| {
//!     println!("Value: {}", value);
//! });
//!
//! combo.handle_event(&mut ComboEvent::InputFocus);
//! combo.handle_event(&mut ComboEvent::InputText("blue".into()));
//! combo.handle_event(&mut ComboEvent::InputBlur);
//! combo.process_pending();
//!
//! assert_eq!(added.snapshot(), vec!["blue"]);
//! assert_eq!(combo.display_options(), ["", "blue", "red", "green"]);
//! ```

use std::collections::VecDeque;

use horizon_combo_core::logging::targets;
use horizon_combo_core::{Signal, TaskQueue};
use serde_json::Value;

use crate::binding::ModelBinding;
use crate::config::ComboBoxConfig;
use crate::controls::{input_class, ComboRender, InputView, SelectControl, SelectView, TextInput};
use crate::engine::{EngineProfile, ListBehavior};
use crate::events::{ComboEvent, FocusTarget, Key, KeyEvent};
use crate::options::{commit_option, reconcile, OptionList, Placeholders};
use crate::watch::OptionsWatch;

/// A combined text field and dropdown select.
///
/// # Signals
///
/// - `value_changed(String)`: the widget changed the value (see [`value_changed`](Self::value_changed))
/// - `added_options_changed(Vec<String>)`: a typed value was committed
/// - `added_options_published(OptionList)`: the widget created its own added
///   options list and the host declared the two-way channel
/// - `focus_changed(FocusTarget)`: the widget moved focus between sub-controls
/// - `options_refreshed(Vec<String>)`: the displayed options changed
pub struct ComboBox {
    config: ComboBoxConfig,
    placeholders: Placeholders,
    behavior: Box<dyn ListBehavior>,

    base_options: Option<OptionList>,
    added_options: OptionList,
    added_publish_pending: bool,
    base_watch: OptionsWatch,
    added_watch: OptionsWatch,

    model: ModelBinding,
    /// Model value the displayed options were last reconciled against.
    reconciled_value: String,

    select: SelectControl,
    input: TextInput,
    focus: FocusTarget,
    options_visible: bool,

    /// Work deferred until after the current event turn.
    tasks: TaskQueue<ComboBox>,
    /// Events raised by the widget's own focus moves, handled right after
    /// the handler that caused them.
    async_events: VecDeque<ComboEvent>,

    // Signals
    /// Signal emitted with the new contents when a value is committed.
    pub added_options_changed: Signal<Vec<String>>,
    /// Signal emitted when the widget publishes a list it created itself.
    pub added_options_published: Signal<OptionList>,
    /// Signal emitted when the widget moves focus.
    pub focus_changed: Signal<FocusTarget>,
    /// Signal emitted when the displayed options change.
    pub options_refreshed: Signal<Vec<String>>,
}

impl ComboBox {
    /// Create a combo box with default configuration.
    pub fn new() -> Self {
        Self::with_config(ComboBoxConfig::default())
    }

    /// Create a combo box from a configuration.
    pub fn with_config(config: ComboBoxConfig) -> Self {
        tracing::debug!(
            target: targets::WIDGET,
            options_watch = ?config.options_watch,
            added_options_watch = ?config.added_options_watch,
            "creating combo box"
        );
        let mut combo = Self {
            placeholders: config.placeholders(),
            behavior: Box::new(EngineProfile::default()),
            base_options: None,
            added_options: OptionList::new(),
            added_publish_pending: true,
            base_watch: OptionsWatch::new(config.options_watch),
            added_watch: OptionsWatch::new(config.added_options_watch),
            model: ModelBinding::new(),
            reconciled_value: String::new(),
            select: SelectControl::new(),
            input: TextInput::new(),
            focus: FocusTarget::None,
            options_visible: false,
            tasks: TaskQueue::new(),
            async_events: VecDeque::new(),
            added_options_changed: Signal::new(),
            added_options_published: Signal::new(),
            focus_changed: Signal::new(),
            options_refreshed: Signal::new(),
            config,
        };
        combo.refresh_options();
        combo
    }

    /// Use the given list behavior instead of the generic engine profile.
    pub fn with_behavior(mut self, behavior: impl ListBehavior + 'static) -> Self {
        self.behavior = Box::new(behavior);
        self
    }

    /// Set the base options using builder pattern.
    pub fn with_options(mut self, options: OptionList) -> Self {
        self.set_options(Some(options));
        self.refresh_options();
        self
    }

    /// Set the added options using builder pattern.
    pub fn with_added_options(mut self, added: OptionList) -> Self {
        self.set_added_options(Some(added));
        self.refresh_options();
        self
    }

    /// Set the initial value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self.refresh_options();
        self
    }

    // =========================================================================
    // Host-facing state
    // =========================================================================

    /// The configuration the widget was created with.
    pub fn config(&self) -> &ComboBoxConfig {
        &self.config
    }

    /// The base options handle, if the host supplied one.
    pub fn options(&self) -> Option<&OptionList> {
        self.base_options.as_ref()
    }

    /// Set or clear the base options.
    ///
    /// The change is picked up by the next digest according to the
    /// configured watch mode.
    pub fn set_options(&mut self, options: Option<OptionList>) {
        self.base_options = options;
    }

    /// Set the base options from a loosely typed host value.
    ///
    /// Anything other than an array clears the base options.
    pub fn set_options_json(&mut self, value: &Value) {
        self.set_options(OptionList::from_json(value));
    }

    /// A handle to the added options list.
    pub fn added_options(&self) -> OptionList {
        self.added_options.clone()
    }

    /// Adopt the host's added options list, or create one if `None`.
    pub fn set_added_options(&mut self, added: Option<OptionList>) {
        match added {
            Some(list) => {
                self.added_options = list;
                self.added_publish_pending = false;
            }
            None => {
                tracing::debug!(
                    target: targets::WIDGET,
                    "no added options list supplied by host; creating a new list for user-added options"
                );
                self.added_options = OptionList::new();
                self.added_publish_pending = true;
            }
        }
    }

    /// Set the added options from a loosely typed host value.
    ///
    /// Anything other than an array makes the widget create its own list.
    pub fn set_added_options_json(&mut self, value: &Value) {
        self.set_added_options(OptionList::from_json(value));
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.model.get()
    }

    /// Push a value from the host. The host is not notified back.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.model.render(value);
    }

    /// Signal emitted whenever the widget changes the value.
    pub fn value_changed(&self) -> &Signal<String> {
        &self.model.value_changed
    }

    /// Check if both sub-controls are disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Enable or disable both sub-controls.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Set the extra classes applied to both sub-controls.
    pub fn set_class(&mut self, class: impl Into<String>) {
        self.config.class = class.into();
    }

    /// Set the placeholder shown when options are available.
    pub fn set_options_placeholder(&mut self, text: Option<String>) {
        self.config.options_placeholder = text;
        self.placeholders = self.config.placeholders();
        self.refresh_options();
    }

    /// Set the placeholder shown when no options are available.
    pub fn set_optionless_placeholder(&mut self, text: Option<String>) {
        self.config.optionless_placeholder = text;
        self.placeholders = self.config.placeholders();
        self.refresh_options();
    }

    /// The displayed options, blank sentinel first.
    pub fn display_options(&self) -> &[String] {
        self.select.options()
    }

    /// The select control's selected index.
    pub fn selected_index(&self) -> Option<usize> {
        self.select.selected_index()
    }

    /// The text field's current placeholder.
    pub fn placeholder(&self) -> &str {
        self.input.placeholder()
    }

    /// Best-effort guess whether the native option list is open.
    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    /// The focused sub-control.
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Check whether deferred work is waiting for [`process_pending`](Self::process_pending).
    pub fn has_pending_tasks(&self) -> bool {
        self.tasks.has_pending()
    }

    /// Snapshot both sub-controls for rendering.
    pub fn render(&self) -> ComboRender {
        let disabled = self.is_disabled();
        ComboRender {
            select: SelectView {
                options: self.select.options().to_vec(),
                selected_index: self.select.selected_index(),
                disabled,
                focused: self.focus == FocusTarget::Select,
                class: self.config.class.clone(),
            },
            input: InputView {
                value: self.model.get(),
                placeholder: self.input.placeholder().to_string(),
                disabled,
                focused: self.focus == FocusTarget::Input,
                class: input_class(&self.config.class, self.select.count() > 1),
            },
        }
    }

    // =========================================================================
    // Option list
    // =========================================================================

    /// Recompute the displayed options and the placeholder.
    #[tracing::instrument(skip_all, target = "horizon_combo::combo_box", level = "trace")]
    pub fn refresh_options(&mut self) {
        let base = self
            .base_options
            .as_ref()
            .map(OptionList::snapshot)
            .unwrap_or_default();
        let added = self.added_options.snapshot();
        let value = self.model.get();

        let result = reconcile(&base, &added, &value);
        self.input
            .set_placeholder(self.placeholders.select(result.has_options));

        let options_changed = self.select.set_options(result.options);
        if options_changed || self.reconciled_value != value {
            self.select.select_value(&value);
        }
        self.reconciled_value = value;

        if options_changed {
            tracing::trace!(target: targets::WIDGET, count = self.select.count(), "displayed options changed");
            self.options_refreshed.emit(self.select.options().to_vec());
        }
    }

    /// Commit the current value as a user-added option.
    ///
    /// Returns `true` if the added options changed.
    pub fn add_option(&mut self) -> bool {
        let base = self
            .base_options
            .as_ref()
            .map(OptionList::snapshot)
            .unwrap_or_default();
        let value = self.model.get();

        if !commit_option(&base, &self.added_options, &value) {
            return false;
        }
        self.refresh_options();
        self.added_options_changed.emit(self.added_options.snapshot());
        true
    }

    // =========================================================================
    // Event turn
    // =========================================================================

    /// Handle an event from one of the sub-controls.
    ///
    /// Returns `true` if the event was handled. A disabled widget ignores
    /// all events.
    pub fn handle_event(&mut self, event: &mut ComboEvent) -> bool {
        if self.is_disabled() {
            tracing::trace!(target: targets::WIDGET, ?event, "ignoring event while disabled");
            return false;
        }
        let handled = self.dispatch(event);
        self.flush_async_events();
        self.digest();
        handled
    }

    /// Run the work deferred during previous event turns.
    ///
    /// A digest pass runs first, then each task in posting order with a
    /// digest pass after every task. Tasks posted along the way run in the
    /// same call. Returns the number of tasks run.
    #[tracing::instrument(skip_all, target = "horizon_combo::combo_box", level = "trace")]
    pub fn process_pending(&mut self) -> usize {
        self.digest();
        let mut processed = 0;
        while let Some((id, task)) = self.tasks.pop() {
            tracing::trace!(target: targets::TASK, task_id = id.as_u64(), "running deferred task");
            task(self);
            self.flush_async_events();
            self.digest();
            processed += 1;
        }
        processed
    }

    /// Check watched inputs and refresh if anything changed.
    fn digest(&mut self) {
        if self.added_publish_pending {
            self.added_publish_pending = false;
            if self.config.added_options_bound {
                tracing::debug!(target: targets::WIDGET, "publishing widget-created added options list");
                self.added_options_published.emit(self.added_options.clone());
            } else {
                tracing::debug!(
                    target: targets::WIDGET,
                    "added options channel not bound; host cannot observe added values"
                );
            }
        }

        let base_changed = self.base_watch.check(self.base_options.as_ref());
        if base_changed {
            tracing::debug!(target: targets::WATCH, mode = ?self.base_watch.mode(), "base options changed");
        }
        let added_changed = self.added_watch.check(Some(&self.added_options));
        if added_changed {
            tracing::debug!(target: targets::WATCH, mode = ?self.added_watch.mode(), "added options changed");
        }
        let value_changed = self.model.with(|value| *value != self.reconciled_value);

        if base_changed || added_changed || value_changed {
            self.refresh_options();
        }
    }

    fn flush_async_events(&mut self) {
        while let Some(mut event) = self.async_events.pop_front() {
            self.dispatch(&mut event);
        }
    }

    fn dispatch(&mut self, event: &mut ComboEvent) -> bool {
        match event {
            ComboEvent::InputKeyDown(e) => {
                self.note_input_focus();
                self.on_input_keydown(e)
            }
            ComboEvent::InputKeyUp(_) => {
                self.refresh_options();
                true
            }
            ComboEvent::InputText(text) => {
                self.note_input_focus();
                self.model.set(text.as_str());
                true
            }
            ComboEvent::InputFocus => {
                self.focus = FocusTarget::Input;
                true
            }
            ComboEvent::InputBlur => {
                if self.focus == FocusTarget::Input {
                    self.focus = FocusTarget::None;
                }
                self.add_option();
                true
            }
            ComboEvent::SelectKeyDown(e) => self.on_select_keydown(e),
            ComboEvent::SelectChange => {
                self.on_select_change();
                true
            }
            ComboEvent::SelectClick => {
                self.on_select_click();
                true
            }
            ComboEvent::SelectPick(index) => {
                if self.select.set_selected_index(*index) {
                    self.on_select_change();
                    true
                } else {
                    false
                }
            }
            ComboEvent::SelectHighlight(index) => self.select.set_selected_index(*index),
            ComboEvent::SelectFocus => {
                self.focus = FocusTarget::Select;
                true
            }
            ComboEvent::SelectBlur => {
                if self.focus == FocusTarget::Select {
                    self.focus = FocusTarget::None;
                }
                tracing::trace!(target: targets::WIDGET, "select blurred; options hidden");
                self.options_visible = false;
                true
            }
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Move focus to the select control.
    pub fn focus_select(&mut self) {
        self.move_focus(FocusTarget::Select);
    }

    /// Move focus to the text field.
    pub fn focus_input(&mut self) {
        self.move_focus(FocusTarget::Input);
    }

    /// Keys and text only reach a focused text field.
    fn note_input_focus(&mut self) {
        if self.focus != FocusTarget::Input {
            tracing::trace!(target: targets::WIDGET, previous = ?self.focus, "text field input implies focus");
            self.focus = FocusTarget::Input;
        }
    }

    fn move_focus(&mut self, next: FocusTarget) {
        if self.is_disabled() || self.focus == next {
            return;
        }
        let previous = std::mem::replace(&mut self.focus, next);
        tracing::debug!(target: targets::WIDGET, ?previous, ?next, "moving focus");
        match previous {
            FocusTarget::Input => self.async_events.push_back(ComboEvent::InputBlur),
            FocusTarget::Select => self.async_events.push_back(ComboEvent::SelectBlur),
            FocusTarget::None => {}
        }
        self.focus_changed.emit(next);
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn toggle_options_visible(&mut self) {
        self.options_visible = !self.options_visible;
    }

    /// Focus the select, move its selection by `shift`, and report a change
    /// once the turn is over.
    fn change_and_focus_selection(&mut self, shift: isize) {
        tracing::trace!(target: targets::WIDGET, shift, "change_and_focus_selection");
        self.focus_select();
        if let Some(index) = self.select.shifted_index(shift) {
            self.select.set_selected_index(index);
            self.tasks.post(|combo: &mut ComboBox| {
                combo.dispatch(&mut ComboEvent::SelectChange);
            });
        }
    }

    fn on_input_keydown(&mut self, event: &mut KeyEvent) -> bool {
        match event.key {
            Key::Enter | Key::Alt => {
                self.focus_select();
                true
            }
            Key::ArrowDown => {
                event.prevent_default();
                event.stop_propagation();
                self.change_and_focus_selection(1);
                true
            }
            Key::ArrowUp => {
                event.prevent_default();
                event.stop_propagation();
                self.change_and_focus_selection(-1);
                true
            }
            _ => false,
        }
    }

    fn on_select_keydown(&mut self, event: &mut KeyEvent) -> bool {
        let keydown_while_open = self.behavior.emits_keydown_while_open();
        match event.key {
            Key::Enter => {
                tracing::trace!(
                    target: targets::WIDGET,
                    value = self.select.value(),
                    options_visible = self.options_visible,
                    "select Enter"
                );
                self.tasks.post(|combo: &mut ComboBox| {
                    if combo.select.value().is_empty() {
                        combo.focus_input();
                    }
                });
                if !event.alt() {
                    if keydown_while_open {
                        self.options_visible = false;
                    } else {
                        // Enter toggles the list on these engines.
                        self.toggle_options_visible();
                    }
                }
                true
            }
            Key::ArrowUp | Key::ArrowDown => {
                tracing::trace!(
                    target: targets::WIDGET,
                    alt = event.alt(),
                    options_visible = self.options_visible,
                    "select arrow"
                );
                if event.alt() {
                    self.toggle_options_visible();
                    if !keydown_while_open {
                        // No further keydown arrives while the list is open.
                        self.options_visible = true;
                    }
                } else {
                    self.tasks.post(|combo: &mut ComboBox| {
                        if !combo.options_visible {
                            combo.change_and_focus_selection(0);
                        }
                    });
                }
                true
            }
            _ => false,
        }
    }

    fn on_select_change(&mut self) {
        let value = self.select.value().to_string();
        tracing::trace!(target: targets::WIDGET, value = %value, "select change");
        self.model.set(value);
        // A change means the list closed; deferred so it overrides other
        // handlers in the same turn.
        self.tasks.post(|combo: &mut ComboBox| {
            combo.options_visible = false;
        });
    }

    fn on_select_click(&mut self) {
        if self.options_visible && self.model.with(|value| value.is_empty()) {
            tracing::debug!(target: targets::WIDGET, "click closed list on blank option; focusing text field");
            self.focus_input();
        }
        self.toggle_options_visible();
        tracing::trace!(target: targets::WIDGET, options_visible = self.options_visible, "select click");
    }
}

impl Default for ComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboBox")
            .field("value", &self.model.get())
            .field("display_options", &self.select.options())
            .field("selected_index", &self.select.selected_index())
            .field("focus", &self.focus)
            .field("options_visible", &self.options_visible)
            .field("pending_tasks", &self.tasks.pending_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ComboBox {
        ComboBox::with_config(
            ComboBoxConfig::new()
                .with_options_placeholder("Pick or type")
                .with_optionless_placeholder("Type"),
        )
        .with_options(OptionList::from(["red", "green"]))
    }

    #[test]
    fn test_combo_box_creation() {
        let combo = ComboBox::new();
        assert_eq!(combo.display_options(), [""]);
        assert_eq!(combo.value(), "");
        assert_eq!(combo.focus(), FocusTarget::None);
        assert!(!combo.options_visible());
        assert!(!combo.has_pending_tasks());
    }

    #[test]
    fn test_placeholder_follows_options() {
        let mut combo = colors();
        assert_eq!(combo.display_options(), ["", "red", "green"]);
        assert_eq!(combo.placeholder(), "Pick or type");

        combo.set_options(None);
        combo.process_pending();
        assert_eq!(combo.display_options(), [""]);
        assert_eq!(combo.placeholder(), "Type");
    }

    #[test]
    fn test_select_click_toggles_visibility() {
        let mut combo = colors();
        combo.handle_event(&mut ComboEvent::SelectClick);
        assert!(combo.options_visible());
        combo.handle_event(&mut ComboEvent::SelectClick);
        assert!(!combo.options_visible());
    }

    #[test]
    fn test_select_click_on_blank_focuses_input() {
        let mut combo = colors();
        combo.handle_event(&mut ComboEvent::SelectFocus);
        combo.handle_event(&mut ComboEvent::SelectClick);
        assert!(combo.options_visible());

        combo.handle_event(&mut ComboEvent::SelectClick);
        assert_eq!(combo.focus(), FocusTarget::Input);
        assert!(!combo.options_visible());
    }

    #[test]
    fn test_select_change_closes_list_after_turn() {
        let mut combo = colors();
        combo.handle_event(&mut ComboEvent::SelectClick);
        combo.handle_event(&mut ComboEvent::SelectPick(2));
        assert_eq!(combo.value(), "green");
        assert!(combo.options_visible());

        assert_eq!(combo.process_pending(), 1);
        assert!(!combo.options_visible());
    }

    #[test]
    fn test_select_blur_hides_options() {
        let mut combo = colors();
        combo.handle_event(&mut ComboEvent::SelectFocus);
        combo.handle_event(&mut ComboEvent::SelectClick);
        combo.handle_event(&mut ComboEvent::SelectBlur);
        assert!(!combo.options_visible());
        assert_eq!(combo.focus(), FocusTarget::None);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut combo = colors();
        combo.set_disabled(true);
        assert!(!combo.handle_event(&mut ComboEvent::SelectClick));
        assert!(!combo.options_visible());

        let render = combo.render();
        assert!(render.select.disabled);
        assert!(render.input.disabled);
    }

    #[test]
    fn test_render_applies_classes() {
        let mut combo = colors();
        combo.set_class("form-control");
        let render = combo.render();
        assert_eq!(render.select.class, "form-control");
        assert_eq!(render.input.class, "form-control shorterInput");

        combo.set_options(None);
        combo.process_pending();
        assert_eq!(combo.render().input.class, "form-control");
    }

    #[test]
    fn test_set_value_selects_matching_option() {
        let mut combo = colors();
        combo.set_value("green");
        combo.process_pending();
        assert_eq!(combo.selected_index(), Some(2));
        assert_eq!(combo.display_options(), ["", "red", "green"]);
    }
}
