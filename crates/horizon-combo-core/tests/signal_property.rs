//! Integration tests for properties paired with change signals.

use std::sync::Arc;

use horizon_combo_core::{Property, Signal, TaskQueue};
use parking_lot::Mutex;

struct TestField {
    text: Property<String>,
    text_changed: Signal<String>,
}

impl TestField {
    fn new() -> Self {
        Self {
            text: Property::default(),
            text_changed: Signal::new(),
        }
    }

    fn set_text(&self, text: &str) {
        if self.text.set(text.to_string()) {
            self.text_changed.emit(text.to_string());
        }
    }
}

#[test]
fn test_property_change_notifies_once() {
    let field = TestField::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    field.text_changed.connect(move |text| {
        seen_clone.lock().push(text.clone());
    });

    field.set_text("red");
    field.set_text("red");
    field.set_text("green");

    assert_eq!(*seen.lock(), vec!["red".to_string(), "green".to_string()]);
}

#[test]
fn test_deferred_task_sees_settled_state() {
    let mut field = TestField::new();
    let mut queue = TaskQueue::<TestField>::new();
    let observed = Arc::new(Mutex::new(String::new()));

    let observed_clone = observed.clone();
    queue.post(move |field| {
        *observed_clone.lock() = field.text.get();
    });

    // Synchronous work in the same turn lands before the task runs.
    field.set_text("settled");
    queue.process_all(&mut field);

    assert_eq!(*observed.lock(), "settled");
}
