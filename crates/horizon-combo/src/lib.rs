//! Horizon Combo: a combined text field and dropdown select.
//!
//! The combo box lets a user pick from a supplied list of options or type a
//! new value. Typed values are merged into a shared list of added options,
//! so they are offered again on later interactions.
//!
//! # Crate Layout
//!
//! - [`combo_box`]: the [`ComboBox`] widget and its focus/keyboard handling
//! - [`options`]: shared option lists and the reconciler that builds the
//!   displayed list
//! - [`watch`]: reference or content based change observation
//! - [`engine`]: native list behavior detection
//! - [`binding`]: two-way value binding with the host
//! - [`controls`]: sub-control models and render views
//! - [`config`]: widget attributes, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use horizon_combo::{ComboBox, ComboEvent, Key, KeyEvent, OptionList};
//!
//! let mut combo = ComboBox::new().with_options(OptionList::from(["a", "b"]));
//! assert_eq!(combo.display_options(), ["", "a", "b"]);
//!
//! combo.handle_event(&mut ComboEvent::InputFocus);
//! combo.handle_event(&mut ComboEvent::InputKeyDown(KeyEvent::new(Key::ArrowDown)));
//! combo.process_pending();
//!
//! assert_eq!(combo.value(), "a");
//! ```

pub mod binding;
pub mod combo_box;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod events;
pub mod options;
pub mod watch;

pub use binding::ModelBinding;
pub use combo_box::ComboBox;
pub use config::ComboBoxConfig;
pub use controls::{ComboRender, InputView, SelectView, SHORTER_INPUT_CLASS};
pub use engine::{EngineProfile, ListBehavior};
pub use error::{ComboError, ComboResult};
pub use events::{ComboEvent, FocusTarget, Key, KeyEvent, KeyboardModifiers};
pub use options::{OptionList, Placeholders, Reconciled};
pub use watch::WatchMode;

pub use horizon_combo_core::{ConnectionGuard, ConnectionId, Signal};
