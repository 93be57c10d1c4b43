//! External value binding.
//!
//! Bridges the widget's internal model to the host's value. Host pushes go
//! through [`ModelBinding::render`] and never echo back; internal changes go
//! through [`ModelBinding::set`] and are pushed to the host through
//! [`ModelBinding::value_changed`] on every change.

use horizon_combo_core::logging::targets;
use horizon_combo_core::{Property, Signal};

/// Two-way pass-through between the widget model and the host value.
#[derive(Default)]
pub struct ModelBinding {
    model: Property<String>,
    /// Emitted with the new value whenever the widget changes the model.
    pub value_changed: Signal<String>,
}

impl ModelBinding {
    /// Create a binding with an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current model value.
    pub fn get(&self) -> String {
        self.model.get()
    }

    /// Access the model without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        self.model.with(|value| f(value))
    }

    /// Copy a value pushed by the host into the model.
    ///
    /// Returns `true` if the model changed. The host is not notified.
    pub fn render(&self, external: impl Into<String>) -> bool {
        let changed = self.model.set(external.into());
        if changed {
            tracing::trace!(target: targets::WIDGET, "model rendered from host value");
        }
        changed
    }

    /// Change the model from inside the widget, pushing the value to the host.
    ///
    /// Returns `true` if the model changed.
    pub fn set(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.model.replace(value.clone()) {
            Some(previous) => {
                tracing::trace!(
                    target: targets::WIDGET,
                    previous = %previous,
                    value = %value,
                    "pushing model value to host"
                );
                self.value_changed.emit(value);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for ModelBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBinding")
            .field("model", &self.model.get())
            .finish()
    }
}
