//! Event types delivered to the combo box.
//!
//! A combo box has two sub-controls, a select and a text field. The host
//! forwards native events from either one as a [`ComboEvent`]; key events
//! carry [`KeyEvent`] so handlers can suppress the platform default.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Keys the combo box distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// The Alt key itself.
    Alt,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// A printable character.
    Character(char),
    /// Any other key.
    Other,
}

/// A key press or release on one of the sub-controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key involved.
    pub key: Key,
    /// Modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    pub fn new(key: Key) -> Self {
        Self::with_modifiers(key, KeyboardModifiers::NONE)
    }

    /// Create a key event with modifiers.
    pub fn with_modifiers(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            key,
            modifiers,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create a key event with Alt held.
    pub fn with_alt(key: Key) -> Self {
        Self::with_modifiers(key, KeyboardModifiers::ALT)
    }

    /// Whether Alt is held.
    pub fn alt(&self) -> bool {
        self.modifiers.alt
    }

    /// Ask the host to skip the platform default action (e.g. scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the platform default action should be skipped.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Ask the host not to propagate the event to ancestors.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether propagation should stop.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Which sub-control holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FocusTarget {
    /// Neither sub-control is focused.
    #[default]
    None,
    /// The select control is focused.
    Select,
    /// The text field is focused.
    Input,
}

/// A native event forwarded from one of the sub-controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboEvent {
    /// Key pressed in the text field. Marks the text field focused.
    InputKeyDown(KeyEvent),
    /// Key released in the text field.
    InputKeyUp(KeyEvent),
    /// The text field's contents were edited to the given text. Marks the
    /// text field focused.
    InputText(String),
    /// The text field gained focus.
    InputFocus,
    /// The text field lost focus.
    InputBlur,
    /// Key pressed on the select control.
    SelectKeyDown(KeyEvent),
    /// The select control reported a value change.
    SelectChange,
    /// The select control was clicked.
    SelectClick,
    /// The native list picked the option at this index (selection plus change).
    SelectPick(usize),
    /// The native control moved its selection to this index without
    /// reporting a change.
    SelectHighlight(usize),
    /// The select control gained focus.
    SelectFocus,
    /// The select control lost focus.
    SelectBlur,
}
