//! Property system for Horizon Combo.
//!
//! Properties are value cells with change detection. When `set()` reports a
//! change, the owner emits the associated notification signal.
//!
//! # Example
//!
//! ```
//! use horizon_combo_core::{Property, Signal};
//!
//! struct Field {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl Field {
//!     fn set_text(&self, text: &str) {
//!         if self.text.set(text.to_string()) {
//!             self.text_changed.emit(text.to_string());
//!         }
//!     }
//! }
//!
//! let field = Field { text: Property::default(), text_changed: Signal::new() };
//! field.set_text("red");
//! assert_eq!(field.text.get(), "red");
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(String::from("red"));

        assert!(!prop.set("red".into()));
        assert!(prop.set("blue".into()));
        assert_eq!(prop.get(), "blue");
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new("hello".to_string());

        assert!(prop.replace("hello".to_string()).is_none());

        let old = prop.replace("world".to_string());
        assert_eq!(old, Some("hello".to_string()));
        assert_eq!(prop.get(), "world");
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec!["a".to_string(), "b".to_string()]);
        let len = prop.with(|v| v.len());
        assert_eq!(len, 2);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<String> = Property::default();
        assert_eq!(prop.get(), "");
    }
}
