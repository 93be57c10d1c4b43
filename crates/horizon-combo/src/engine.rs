//! Platform list-behavior detection.
//!
//! Native select controls do not report when their option list opens or
//! closes, and engines differ in which key events they deliver while the
//! list is open. The combo box only needs one fact about the host engine,
//! captured by [`ListBehavior`].

use horizon_combo_core::logging::targets;

/// Capabilities of the host's native select control.
pub trait ListBehavior: Send + Sync {
    /// Whether key-down events reach the select control while its list is open.
    ///
    /// Engines that return `false` also use Enter to toggle the list.
    fn emits_keydown_while_open(&self) -> bool;
}

/// Engine family, detected from a user agent string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineProfile {
    /// WebKit and Blink derived engines.
    WebKit,
    /// Every other engine (Gecko, Trident, EdgeHTML).
    #[default]
    Generic,
}

impl EngineProfile {
    /// Detect the engine family from a user agent string.
    ///
    /// EdgeHTML advertises WebKit in its user agent but behaves like the
    /// other engines, so an `Edge` token overrides the WebKit token.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let profile = if user_agent.contains("WebKit") && !user_agent.contains("Edge") {
            Self::WebKit
        } else {
            Self::Generic
        };
        tracing::debug!(target: targets::WIDGET, ?profile, "detected list engine profile");
        profile
    }
}

impl ListBehavior for EngineProfile {
    fn emits_keydown_while_open(&self) -> bool {
        matches!(self, Self::Generic)
    }
}
