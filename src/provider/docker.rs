//! `dokploy_docker_container` and `dokploy_docker_containers` data sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    decode_state, encode_state, non_empty, required, DataSource, ProviderError, ProviderResult, State,
};
use crate::client::types::{ContainerConfig, ContainerSummary};
use crate::client::{ClientError, DokployClient};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContainerLookup {
    container_id: Option<String>,
    server_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct DockerContainerModel {
    container_id: String,
    server_id: Option<String>,
    id: String,
    name: String,
    created: String,
    path: String,
    image: String,
    platform: String,
    restart_count: i64,
    state_status: String,
    state_running: bool,
    state_paused: bool,
    state_restarting: bool,
    state_dead: bool,
    state_pid: i64,
    state_exit_code: i64,
    state_error: String,
    state_started_at: String,
    state_finished_at: String,
    config_hostname: String,
    config_user: String,
    config_image: String,
    config_working_dir: String,
    config_json: String,
}

impl DockerContainerModel {
    fn new(lookup: ContainerLookup, container_id: String, config: ContainerConfig, raw: String) -> Self {
        Self {
            container_id,
            server_id: lookup.server_id,
            id: config.id,
            name: config.name,
            created: config.created,
            path: config.path,
            image: config.image,
            platform: config.platform,
            restart_count: config.restart_count,
            state_status: config.state.status,
            state_running: config.state.running,
            state_paused: config.state.paused,
            state_restarting: config.state.restarting,
            state_dead: config.state.dead,
            state_pid: config.state.pid,
            state_exit_code: config.state.exit_code,
            state_error: config.state.error,
            state_started_at: config.state.started_at,
            state_finished_at: config.state.finished_at,
            config_hostname: config.config.hostname,
            config_user: config.config.user,
            config_image: config.config.image,
            config_working_dir: config.config.working_dir,
            config_json: raw,
        }
    }
}

pub struct DockerContainerDataSource;

#[async_trait]
impl DataSource for DockerContainerDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_docker_container"
    }

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State> {
        let lookup: ContainerLookup = decode_state(self.type_name(), config)?;
        let container_id = required(&lookup.container_id, "container_id")?.to_string();
        let server_id = non_empty(&lookup.server_id).unwrap_or_default().to_string();

        let raw = client
            .get_docker_container_config_raw(&container_id, &server_id)
            .await?;
        let config: ContainerConfig = serde_json::from_value(raw.clone())
            .map_err(|e| ClientError::decode("docker.getConfig", e))?;
        let raw = serde_json::to_string_pretty(&raw)
            .map_err(|e| ClientError::decode("docker.getConfig", e))?;

        encode_state(
            self.type_name(),
            &DockerContainerModel::new(lookup, container_id, config, raw),
        )
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DockerContainersModel {
    server_id: Option<String>,
    app_name: Option<String>,
    app_type: Option<String>,
    label_type: Option<String>,
    #[serde(skip_deserializing)]
    containers: Vec<ContainerRow>,
}

#[derive(Debug, Serialize)]
struct ContainerRow {
    container_id: String,
    name: String,
    image: Option<String>,
    ports: Option<String>,
    state: String,
    status: Option<String>,
}

impl ContainerRow {
    /// Filtered listings only carry id, name and state.
    fn partial(c: ContainerSummary) -> Self {
        Self {
            container_id: c.container_id,
            name: c.name,
            image: None,
            ports: None,
            state: c.state,
            status: None,
        }
    }
}

impl From<ContainerSummary> for ContainerRow {
    fn from(c: ContainerSummary) -> Self {
        Self {
            container_id: c.container_id,
            name: c.name,
            image: c.image,
            ports: c.ports,
            state: c.state,
            status: c.status,
        }
    }
}

pub struct DockerContainersDataSource;

#[async_trait]
impl DataSource for DockerContainersDataSource {
    fn type_name(&self) -> &'static str {
        "dokploy_docker_containers"
    }

    async fn read(&self, client: &DokployClient, config: State) -> ProviderResult<State> {
        let mut data: DockerContainersModel = decode_state(self.type_name(), config)?;

        let server_id = non_empty(&data.server_id).unwrap_or_default();
        let app_name = non_empty(&data.app_name).unwrap_or_default();
        let app_type = non_empty(&data.app_type).unwrap_or_default();
        let label_type = non_empty(&data.label_type).unwrap_or_default();

        if !app_type.is_empty() && !label_type.is_empty() {
            return Err(ProviderError::invalid_config(
                "app_type",
                "cannot be combined with label_type; use app_type for name matching or label_type for label filtering",
            ));
        }

        if app_name.is_empty() && (!app_type.is_empty() || !label_type.is_empty()) {
            tracing::warn!("app_type and label_type require app_name to be set; ignoring them");
        }

        let containers: Vec<ContainerRow> = if !app_name.is_empty() && !label_type.is_empty() {
            client
                .list_docker_containers_by_app_label(app_name, label_type, server_id)
                .await?
                .into_iter()
                .map(ContainerRow::partial)
                .collect()
        } else if !app_name.is_empty() {
            client
                .list_docker_containers_by_app_name_match(app_name, app_type, server_id)
                .await?
                .into_iter()
                .map(ContainerRow::partial)
                .collect()
        } else {
            client
                .list_docker_containers(server_id)
                .await?
                .into_iter()
                .map(Into::into)
                .collect()
        };

        data.containers = containers;
        encode_state(self.type_name(), &data)
    }
}
