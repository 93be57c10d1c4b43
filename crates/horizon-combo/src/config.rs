//! Combo box configuration.
//!
//! These are the attributes a host sets once when it creates the widget.
//! Every field has a default, so a configuration file only needs to list
//! what differs:
//!
//! ```toml
//! options_placeholder = "Pick or type a color"
//! optionless_placeholder = "Type a color"
//! class = "form-control"
//! options_watch = "collection"
//! added_options_bound = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ComboResult;
use crate::options::Placeholders;
use crate::watch::WatchMode;

/// Static configuration of a [`ComboBox`](crate::ComboBox).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboBoxConfig {
    /// Placeholder shown in the text field when options are available.
    pub options_placeholder: Option<String>,
    /// Placeholder shown in the text field when no options are available.
    pub optionless_placeholder: Option<String>,
    /// Extra classes applied to both sub-controls.
    pub class: String,
    /// Disables both sub-controls.
    pub disabled: bool,
    /// How changes to the base options are detected.
    pub options_watch: WatchMode,
    /// How changes to the added options are detected.
    pub added_options_watch: WatchMode,
    /// Whether the host declared a two-way channel for added options.
    ///
    /// When set, a list the widget creates for itself is published through
    /// `added_options_published`. Otherwise the host can only reach it
    /// through `ComboBox::added_options`.
    pub added_options_bound: bool,
}

impl ComboBoxConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ComboResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> ComboResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Set the placeholder shown when options are available.
    pub fn with_options_placeholder(mut self, text: impl Into<String>) -> Self {
        self.options_placeholder = Some(text.into());
        self
    }

    /// Set the placeholder shown when no options are available.
    pub fn with_optionless_placeholder(mut self, text: impl Into<String>) -> Self {
        self.optionless_placeholder = Some(text.into());
        self
    }

    /// Set the extra classes applied to both sub-controls.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set how base option changes are detected.
    pub fn with_options_watch(mut self, mode: WatchMode) -> Self {
        self.options_watch = mode;
        self
    }

    /// Set how added option changes are detected.
    pub fn with_added_options_watch(mut self, mode: WatchMode) -> Self {
        self.added_options_watch = mode;
        self
    }

    /// Declare the two-way added options channel.
    pub fn with_added_options_bound(mut self, bound: bool) -> Self {
        self.added_options_bound = bound;
        self
    }

    /// The placeholder pair of this configuration.
    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            options: self.options_placeholder.clone(),
            optionless: self.optionless_placeholder.clone(),
        }
    }
}
