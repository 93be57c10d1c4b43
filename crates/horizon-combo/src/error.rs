//! Error types for the combo box crate.
//!
//! The widget itself never fails: malformed host inputs degrade to empty
//! lists. Errors only arise while loading configuration.

use thiserror::Error;

/// Errors that can occur while configuring a combo box.
#[derive(Error, Debug)]
pub enum ComboError {
    /// The configuration text was not valid TOML or did not match the schema.
    #[error("invalid combo box configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize combo box configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for combo box operations.
pub type ComboResult<T> = Result<T, ComboError>;
