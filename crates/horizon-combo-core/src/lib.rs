//! Core systems for Horizon Combo.
//!
//! This crate provides the reactive primitives the combo box widget is built on:
//!
//! - **Signal/Slot System**: Type-safe notification of state changes
//! - **Property System**: Value cells with change detection
//! - **Task Queue**: Post-turn deferred work, run after the current event turn
//! - **Logging**: `tracing` targets for filtering diagnostics by subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_combo_core::Signal;
//!
//! let value_changed = Signal::<String>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit("blue".to_string());
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Task Queue Example
//!
//! ```
//! use horizon_combo_core::TaskQueue;
//!
//! let mut counter = 0;
//! let mut queue = TaskQueue::<i32>::new();
//! queue.post(|n| *n += 1);
//! queue.post(|n| *n *= 10);
//!
//! let processed = queue.process_all(&mut counter);
//! assert_eq!(processed, 2);
//! assert_eq!(counter, 10);
//! ```

pub mod logging;
pub mod property;
pub mod signal;
mod task;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{TaskId, TaskQueue};
