//! Host-side bindings: value pushes, option list ownership, and watch modes.

use std::sync::Arc;

use horizon_combo::{ComboBox, ComboBoxConfig, ComboEvent, OptionList, WatchMode};
use parking_lot::Mutex;
use serde_json::json;

#[test]
fn test_host_value_push_is_not_echoed() {
    let mut combo = ComboBox::new().with_options(OptionList::from(["red"]));
    let pushed = Arc::new(Mutex::new(Vec::<String>::new()));
    let pushed_clone = pushed.clone();
    combo.value_changed().connect(move |v| pushed_clone.lock().push(v.clone()));

    combo.set_value("blue");
    combo.process_pending();

    assert_eq!(combo.value(), "blue");
    assert_eq!(combo.display_options(), ["", "blue", "red"]);
    assert_eq!(combo.selected_index(), Some(1));
    assert!(pushed.lock().is_empty());

    combo.handle_event(&mut ComboEvent::InputFocus);
    combo.handle_event(&mut ComboEvent::InputText("blu".into()));
    combo.handle_event(&mut ComboEvent::InputText("bl".into()));
    assert_eq!(*pushed.lock(), vec!["blu".to_string(), "bl".to_string()]);
}

#[test]
fn test_widget_created_list_is_published_when_bound() {
    let mut combo = ComboBox::with_config(ComboBoxConfig::new().with_added_options_bound(true));
    let published = Arc::new(Mutex::new(None::<OptionList>));
    let published_clone = published.clone();
    combo.added_options_published.connect(move |list| {
        *published_clone.lock() = Some(list.clone());
    });

    combo.process_pending();
    let list = published.lock().clone().expect("list published");
    assert!(list.ptr_eq(&combo.added_options()));

    combo.handle_event(&mut ComboEvent::InputFocus);
    combo.handle_event(&mut ComboEvent::InputText("new".into()));
    combo.handle_event(&mut ComboEvent::InputBlur);
    assert_eq!(list.snapshot(), vec!["new"]);
}

#[test]
fn test_widget_created_list_is_not_published_when_unbound() {
    let mut combo = ComboBox::new();
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    combo.added_options_published.connect(move |_| *count_clone.lock() += 1);

    combo.process_pending();
    assert_eq!(*count.lock(), 0);

    combo.set_value("kept");
    assert!(combo.add_option());
    assert_eq!(combo.added_options().snapshot(), vec!["kept"]);
}

#[test]
fn test_host_supplied_list_is_not_republished() {
    let mut combo = ComboBox::with_config(ComboBoxConfig::new().with_added_options_bound(true))
        .with_added_options(OptionList::new());
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    combo.added_options_published.connect(move |_| *count_clone.lock() += 1);

    combo.process_pending();
    assert_eq!(*count.lock(), 0);

    // Clearing the list makes the widget create and publish a fresh one.
    combo.set_added_options(None);
    combo.process_pending();
    assert_eq!(*count.lock(), 1);
}

#[test]
fn test_reference_watch_misses_in_place_edits() {
    let base = OptionList::from(["red"]);
    let mut combo = ComboBox::new().with_options(base.clone());
    combo.process_pending();

    base.push("green");
    combo.process_pending();
    assert_eq!(combo.display_options(), ["", "red"]);

    combo.set_options(Some(OptionList::from(["red", "green"])));
    combo.process_pending();
    assert_eq!(combo.display_options(), ["", "red", "green"]);
}

#[test]
fn test_collection_watch_sees_in_place_edits() {
    let base = OptionList::from(["red"]);
    let added = OptionList::new();
    let mut combo = ComboBox::with_config(
        ComboBoxConfig::new()
            .with_options_watch(WatchMode::Collection)
            .with_added_options_watch(WatchMode::Collection),
    )
    .with_options(base.clone())
    .with_added_options(added.clone());
    combo.process_pending();

    base.push("green");
    added.push("teal");
    combo.process_pending();
    assert_eq!(combo.display_options(), ["", "teal", "red", "green"]);
}

#[test]
fn test_malformed_host_lists_are_treated_as_absent() {
    let mut combo = ComboBox::new();

    combo.set_options_json(&json!({ "not": "a list" }));
    combo.set_added_options_json(&json!(42));
    combo.process_pending();
    assert_eq!(combo.display_options(), [""]);

    combo.set_options_json(&json!(["red", 7, "green"]));
    combo.set_added_options_json(&json!(["teal"]));
    combo.process_pending();
    assert_eq!(combo.display_options(), ["", "teal", "red", "green"]);
}

#[test]
fn test_render_snapshot_serializes() {
    let mut combo = ComboBox::with_config(ComboBoxConfig::new().with_class("form-control"))
        .with_options(OptionList::from(["red"]));
    combo.handle_event(&mut ComboEvent::InputFocus);

    let render = serde_json::to_value(combo.render()).unwrap();
    assert_eq!(render["select"]["options"], json!(["", "red"]));
    assert_eq!(render["select"]["selected_index"], json!(0));
    assert_eq!(render["input"]["class"], json!("form-control shorterInput"));
    assert_eq!(render["input"]["focused"], json!(true));
    assert_eq!(render["select"]["focused"], json!(false));
}
