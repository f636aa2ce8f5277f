//! Type registry for resources and data sources.
//!
//! Maps Terraform type names to constructors. The process-wide instance is
//! built once on first use and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::error::{ProviderError, ProviderResult};
use super::{DataSource, Resource};

pub type ResourceFactory = fn() -> Box<dyn Resource>;
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

/// Constructors keyed by type name.
pub struct Registry {
    resources: BTreeMap<&'static str, ResourceFactory>,
    data_sources: BTreeMap<&'static str, DataSourceFactory>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in types registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    pub fn register_defaults(&mut self) {
        use super::certificate::CertificateResource;
        use super::certificates::{CertificateDataSource, CertificatesDataSource};
        use super::deployments::DeploymentsDataSource;
        use super::destinations::{DestinationDataSource, DestinationsDataSource};
        use super::docker::{DockerContainerDataSource, DockerContainersDataSource};
        use super::environment_variables::EnvironmentVariablesResource;

        self.register_resource(|| Box::new(CertificateResource));
        self.register_resource(|| Box::new(EnvironmentVariablesResource));

        self.register_data_source(|| Box::new(CertificateDataSource));
        self.register_data_source(|| Box::new(CertificatesDataSource));
        self.register_data_source(|| Box::new(DestinationDataSource));
        self.register_data_source(|| Box::new(DestinationsDataSource));
        self.register_data_source(|| Box::new(DeploymentsDataSource));
        self.register_data_source(|| Box::new(DockerContainerDataSource));
        self.register_data_source(|| Box::new(DockerContainersDataSource));
    }

    /// Register a resource constructor under the name it reports
    pub fn register_resource(&mut self, factory: ResourceFactory) {
        self.resources.insert(factory().type_name(), factory);
    }

    /// Register a data-source constructor under the name it reports
    pub fn register_data_source(&mut self, factory: DataSourceFactory) {
        self.data_sources.insert(factory().type_name(), factory);
    }

    pub fn resource(&self, name: &str) -> ProviderResult<Box<dyn Resource>> {
        self.resources
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ProviderError::UnknownType {
                kind: "resource".to_string(),
                name: name.to_string(),
                supported: self.resource_types().iter().map(|t| t.to_string()).collect(),
            })
    }

    pub fn data_source(&self, name: &str) -> ProviderResult<Box<dyn DataSource>> {
        self.data_sources
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ProviderError::UnknownType {
                kind: "data source".to_string(),
                name: name.to_string(),
                supported: self
                    .data_source_types()
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            })
    }

    /// Registered resource type names, sorted
    pub fn resource_types(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }

    /// Registered data-source type names, sorted
    pub fn data_source_types(&self) -> Vec<&'static str> {
        self.data_sources.keys().copied().collect()
    }
}

/// Process-wide registry with the built-in types.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::with_defaults)
}
