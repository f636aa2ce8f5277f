//! Terraform-style resources and data sources on top of the Dokploy client.
//!
//! Each type works on plain JSON state values keyed by attribute name, the
//! same shape Terraform hands a provider. The registry maps type names such as
//! `dokploy_certificate` to constructors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Registry     │  ← Looks up types by name
//! └────────┬────────┘
//!          │
//!    ┌─────┴──────────┐
//!    ▼                ▼
//! ┌──────────┐  ┌────────────┐
//! │ Resource │  │ DataSource │  ← Common interfaces
//! └────┬─────┘  └─────┬──────┘
//!      └───────┬──────┘
//!              ▼
//!      ┌───────────────┐
//!      │ DokployClient │
//!      └───────────────┘
//! ```
//!
//! # Adding a New Type
//!
//! 1. Create a module with a model struct and the type
//! 2. Implement `Resource` or `DataSource`
//! 3. Register it in `Registry::register_defaults()`

pub mod certificate;
pub mod certificates;
pub mod deployments;
pub mod destinations;
pub mod docker;
pub mod environment_variables;
pub mod error;
pub mod registry;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::{ProviderError, ProviderResult};
pub use registry::{registry, Registry};

use crate::client::DokployClient;

/// Attribute map for plans, prior state, new state and data-source config.
pub type State = serde_json::Value;

/// A managed Dokploy entity with a create/read/update/delete lifecycle.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Full type name, e.g. `dokploy_certificate`
    fn type_name(&self) -> &'static str;

    /// Create the entity described by `plan` and return the new state.
    async fn create(&self, client: &DokployClient, plan: State) -> ProviderResult<State>;

    /// Refresh `state` from the API.
    ///
    /// Returns `None` when the entity no longer exists, so the caller can drop
    /// it from state instead of failing.
    async fn read(&self, client: &DokployClient, state: State) -> ProviderResult<Option<State>>;

    /// Apply `plan` on top of `prior` state.
    async fn update(&self, client: &DokployClient, prior: State, plan: State) -> ProviderResult<State>;

    /// Delete the entity. Deleting something already gone succeeds.
    async fn delete(&self, client: &DokployClient, state: State) -> ProviderResult<()>;

    /// Adopt an existing entity by id.
    async fn import(&self, client: &DokployClient, id: &str) -> ProviderResult<State> {
        let state = serde_json::json!({ "id": id });
        self.read(client, state)
            .await?
            .ok_or_else(|| ProviderError::not_found(self.type_name(), id))
    }

    /// Notes to show the operator after a successful import.
    fn import_warnings(&self) -> &'static [&'static str] {
        &[]
    }
}

/// A read-only lookup.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State>;
}

pub(crate) fn decode_state<T: DeserializeOwned>(type_name: &str, value: State) -> ProviderResult<T> {
    serde_json::from_value(value).map_err(|e| ProviderError::invalid_state(type_name, e))
}

pub(crate) fn encode_state<T: Serialize>(type_name: &str, model: &T) -> ProviderResult<State> {
    serde_json::to_value(model).map_err(|e| ProviderError::invalid_state(type_name, e))
}

/// Non-empty value of an optional string attribute.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Required, non-empty string attribute.
pub(crate) fn required<'a>(value: &'a Option<String>, field: &str) -> ProviderResult<&'a str> {
    non_empty(value).ok_or_else(|| ProviderError::invalid_config(field, "must be set"))
}
