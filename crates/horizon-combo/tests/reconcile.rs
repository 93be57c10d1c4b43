//! Option list scenarios observed through the widget.

use std::collections::HashSet;
use std::sync::Arc;

use horizon_combo::options::reconcile;
use horizon_combo::{ComboBox, ComboBoxConfig, ComboEvent, OptionList};
use parking_lot::Mutex;

fn config() -> ComboBoxConfig {
    ComboBoxConfig::new()
        .with_options_placeholder("Pick or type")
        .with_optionless_placeholder("Type a value")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_base_options_with_blank_value() {
    let combo = ComboBox::with_config(config()).with_options(OptionList::from(["red", "green"]));

    assert_eq!(combo.display_options(), ["", "red", "green"]);
    assert_eq!(combo.placeholder(), "Pick or type");
}

#[test]
fn test_no_options() {
    let combo = ComboBox::with_config(config())
        .with_options(OptionList::new())
        .with_added_options(OptionList::new());

    assert_eq!(combo.display_options(), [""]);
    assert_eq!(combo.placeholder(), "Type a value");
}

#[test]
fn test_typed_value_is_displayed_but_not_added() {
    let added = OptionList::new();
    let mut combo = ComboBox::with_config(config())
        .with_options(OptionList::from(["red"]))
        .with_added_options(added.clone());

    combo.handle_event(&mut ComboEvent::InputFocus);
    combo.handle_event(&mut ComboEvent::InputText("blue".into()));

    assert_eq!(combo.display_options(), ["", "blue", "red"]);
    assert!(added.is_empty());
}

#[test]
fn test_blur_commits_typed_value() {
    let added = OptionList::new();
    let mut combo = ComboBox::with_config(config())
        .with_options(OptionList::from(["red"]))
        .with_added_options(added.clone());

    let commits = Arc::new(Mutex::new(Vec::new()));
    let commits_clone = commits.clone();
    combo.added_options_changed.connect(move |items| {
        commits_clone.lock().push(items.clone());
    });

    combo.handle_event(&mut ComboEvent::InputFocus);
    combo.handle_event(&mut ComboEvent::InputText("blue".into()));
    combo.handle_event(&mut ComboEvent::InputBlur);

    assert_eq!(added.snapshot(), vec!["blue"]);
    assert_eq!(combo.display_options(), ["", "blue", "red"]);
    assert_eq!(*commits.lock(), vec![strings(&["blue"])]);

    // A second blur with the same value changes nothing.
    combo.handle_event(&mut ComboEvent::InputFocus);
    combo.handle_event(&mut ComboEvent::InputBlur);
    assert_eq!(added.snapshot(), vec!["blue"]);
    assert_eq!(commits.lock().len(), 1);
}

#[test]
fn test_commit_law() {
    let added = OptionList::new();
    let mut combo = ComboBox::new()
        .with_options(OptionList::from(["red"]))
        .with_added_options(added.clone());

    assert!(!combo.add_option());

    combo.set_value("red");
    assert!(!combo.add_option());
    assert!(added.is_empty());

    combo.set_value("blue");
    assert!(combo.add_option());
    assert!(!combo.add_option());
    assert_eq!(added.snapshot(), vec!["blue"]);

    combo.set_value("teal");
    assert!(combo.add_option());
    assert_eq!(added.snapshot(), vec!["teal", "blue"]);
    assert_eq!(combo.display_options(), ["", "teal", "blue", "red"]);
}

#[test]
fn test_preseeded_duplicate_is_dropped() {
    let combo = ComboBox::new()
        .with_options(OptionList::from(["red"]))
        .with_added_options(OptionList::from(["red"]));

    assert_eq!(combo.display_options(), ["", "red"]);
}

#[test]
fn test_reconcile_invariants_over_mixed_inputs() {
    let pool = ["", "a", "b", "c", "a b"];
    let mut cases = Vec::new();
    for (i, first) in pool.iter().enumerate() {
        for second in pool.iter().skip(i) {
            cases.push(strings(&[*first, *second]));
        }
    }

    for base in &cases {
        for added in &cases {
            for value in pool {
                let result = reconcile(base, added, value);

                assert_eq!(result.options[0], "");
                let unique: HashSet<&String> = result.options.iter().collect();
                assert_eq!(unique.len(), result.options.len(), "duplicates in {:?}", result.options);

                let in_inputs = base.iter().chain(added.iter()).any(|s| s == value);
                if !value.is_empty() && !in_inputs {
                    assert_eq!(result.options[1], value);
                }

                assert_eq!(reconcile(base, added, value), result);
            }
        }
    }
}
