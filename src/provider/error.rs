//! Provider-level error types.
//!
//! Resources and data sources surface client failures unchanged and add the
//! failures that only make sense at the configuration/state layer.

use thiserror::Error;

use crate::client::ClientError;

/// Errors raised by resource and data-source operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The underlying API call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Plan, state or config value did not match the type's model
    #[error("Invalid {type_name} state: {source}")]
    InvalidState {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Attribute combination is not acceptable
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },

    /// A listing was requested without any of its required filters
    #[error("Missing filter: exactly one of {} must be specified", .options.join(", "))]
    MissingFilter { options: Vec<String> },

    /// Entity does not exist (import of an unknown id)
    #[error("{type_name} not found: {id}")]
    NotFound { type_name: String, id: String },

    /// Type does not support in-place updates
    #[error("Update not supported for {type_name}: {message}")]
    UpdateNotSupported { type_name: String, message: String },

    /// No resource or data source registered under this name
    #[error("Unknown {kind}: {name}. Supported: {supported:?}")]
    UnknownType {
        kind: String,
        name: String,
        supported: Vec<String>,
    },
}

impl ProviderError {
    pub fn invalid_state(type_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidState {
            type_name: type_name.into(),
            source,
        }
    }

    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_filter(options: &[&str]) -> Self {
        Self::MissingFilter {
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn not_found(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    pub fn update_not_supported(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpdateNotSupported {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Whether the remote entity is gone, either as an API 404 or a failed import.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Client(err) => err.is_not_found(),
            Self::NotFound { .. } => true,
            _ => false,
        }
    }
}

/// Result type alias for provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
