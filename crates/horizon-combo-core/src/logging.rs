//! Logging facilities for Horizon Combo.
//!
//! Horizon Combo uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_combo=debug")
//!         .init();
//! }
//! ```
//!
//! The widget's diagnostics (watch modes, rejected commits, focus moves) are
//! emitted at `debug` level; per-event state tracing is at `trace` level.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_combo_core::signal";
    /// Post-turn task queue target.
    pub const TASK: &str = "horizon_combo_core::task";
    /// Widget target.
    pub const WIDGET: &str = "horizon_combo::combo_box";
    /// Option list reconciliation target.
    pub const OPTIONS: &str = "horizon_combo::options";
    /// Change observation target.
    pub const WATCH: &str = "horizon_combo::watch";
}
