//! `dokploy_destination` and `dokploy_destinations` data sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode_state, encode_state, required, DataSource, ProviderResult, State};
use crate::client::types::Destination;
use crate::client::DokployClient;

#[derive(Debug, Clone, Serialize)]
pub struct DestinationModel {
    pub id: String,
    pub name: String,
    pub storage_provider: String,
    pub access_key: String,
    pub bucket: String,
    pub region: String,
    pub endpoint: String,
    pub server_id: Option<String>,
    pub organization_id: String,
    pub created_at: String,
}

impl From<Destination> for DestinationModel {
    fn from(dest: Destination) -> Self {
        Self {
            id: dest.destination_id,
            name: dest.name,
            storage_provider: dest.provider,
            access_key: dest.access_key,
            bucket: dest.bucket,
            region: dest.region,
            endpoint: dest.endpoint,
            server_id: dest.server_id,
            organization_id: dest.organization_id,
            created_at: dest.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LookupConfig {
    id: Option<String>,
}

pub struct DestinationDataSource;

#[async_trait]
impl DataSource for DestinationDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_destination"
    }

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State> {
        let config: LookupConfig = decode_state(self.type_name(), config)?;
        let id = required(&config.id, "id")?;

        let dest = client.get_destination(id).await?;
        encode_state(self.type_name(), &DestinationModel::from(dest))
    }
}

#[derive(Debug, Serialize)]
struct DestinationsModel {
    destinations: Vec<DestinationModel>,
}

pub struct DestinationsDataSource;

#[async_trait]
impl DataSource for DestinationsDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_destinations"
    }

    async fn read(&self, client: &DokployClient, _config: State) -> ProviderResult<State> {
        let destinations = client.list_destinations().await?;

        encode_state(
            self.type_name(),
            &DestinationsModel {
                destinations: destinations.into_iter().map(Into::into).collect(),
            },
        )
    }
}
